use crate::models::{DocumentNode, InlineNode, ListItem};
use crate::parsing::inline::parse_inline;
use crate::parsing::rope::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::{BlockQuote, CodeFence},
    types::BlockNode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

/// A block that can still absorb following lines.
#[derive(Debug)]
enum OpenState {
    None,
    Fence {
        language: Option<String>,
        lines: Vec<String>,
        span: Span,
    },
    Quote {
        parts: Vec<String>,
        span: Span,
    },
    List {
        kind: ListKind,
        items: Vec<ListItem>,
        span: Span,
    },
}

/// Phase 2 of block parsing: folds classified lines into [`BlockNode`]s.
pub struct BlockBuilder<'a> {
    wikilink_base: &'a str,
    open: OpenState,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(wikilink_base: &'a str) -> Self {
        Self {
            wikilink_base,
            open: OpenState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match &c.kind {
            LineKind::Quote { content } => self.extend_quote(c.line, content),
            LineKind::Bullet { content } => self.extend_list(ListKind::Bullet, c.line, content),
            LineKind::Ordered { content } => self.extend_list(ListKind::Ordered, c.line, content),
            LineKind::Blank => self.flush(),
            LineKind::Heading { level, text } => {
                self.flush();
                let node = DocumentNode::Heading {
                    level: *level,
                    children: self.inline(text),
                };
                self.emit(node, c.line);
            }
            LineKind::Fence { language } => {
                self.flush();
                self.open = OpenState::Fence {
                    language: language.clone(),
                    lines: vec![],
                    span: c.line,
                };
            }
            LineKind::ThematicBreak => {
                self.flush();
                self.emit(DocumentNode::HorizontalRule, c.line);
            }
            LineKind::Text => {
                self.flush();
                let node = DocumentNode::Paragraph {
                    children: self.inline(&c.text),
                };
                self.emit(node, c.line);
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        if let OpenState::Fence { span, .. } = &self.open {
            log::debug!("unterminated code fence opened at byte {}", span.start);
        }
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenState::Fence { .. })
    }

    fn inline(&self, text: &str) -> Vec<InlineNode> {
        parse_inline(text, self.wikilink_base)
    }

    fn emit(&mut self, node: DocumentNode, span: Span) {
        log::trace!("emitting {} block at {:?}", node.kind_name(), span);
        self.out.push(BlockNode { node, span });
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let closes = CodeFence::closes(&c.text);
        if let OpenState::Fence { lines, span, .. } = &mut self.open {
            span.end = c.line.end;
            if !closes {
                // Fence bodies are raw: the line's own classification is ignored.
                lines.push(c.text.clone());
            }
        }
        if closes {
            self.flush();
        }
    }

    fn extend_quote(&mut self, line: Span, content: &str) {
        if let OpenState::Quote { parts, span } = &mut self.open {
            parts.push(content.to_string());
            span.end = line.end;
            return;
        }
        self.flush();
        self.open = OpenState::Quote {
            parts: vec![content.to_string()],
            span: line,
        };
    }

    fn extend_list(&mut self, kind: ListKind, line: Span, content: &str) {
        let item = ListItem::new(self.inline(content));
        if let OpenState::List {
            kind: open_kind,
            items,
            span,
        } = &mut self.open
            && *open_kind == kind
        {
            items.push(item);
            span.end = line.end;
            return;
        }
        self.flush();
        self.open = OpenState::List {
            kind,
            items: vec![item],
            span: line,
        };
    }

    /// Closes whatever block is open and emits it.
    fn flush(&mut self) {
        let prev = std::mem::replace(&mut self.open, OpenState::None);
        match prev {
            OpenState::None => {}
            OpenState::Fence {
                language,
                lines,
                span,
            } => {
                let node = DocumentNode::CodeBlock {
                    language,
                    code: lines.join("\n"),
                };
                self.emit(node, span);
            }
            OpenState::Quote { parts, span } => {
                let joined = parts.join(BlockQuote::JOIN);
                let node = DocumentNode::BlockQuote {
                    children: self.inline(&joined),
                };
                self.emit(node, span);
            }
            OpenState::List { kind, items, span } => {
                let node = match kind {
                    ListKind::Bullet => DocumentNode::BulletList { items },
                    ListKind::Ordered => DocumentNode::OrderedList { items },
                };
                self.emit(node, span);
            }
        }
    }
}
