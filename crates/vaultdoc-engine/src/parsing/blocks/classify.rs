use crate::models::HeadingLevel;
use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, BulletList, CodeFence, Heading, OrderedList, ThematicBreak};

/// What a line looks like on its own, before any surrounding context is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading { level: HeadingLevel, text: String },
    /// Opens or closes a fence, depending on the builder's state.
    Fence { language: Option<String> },
    Quote { content: String },
    Bullet { content: String },
    Ordered { content: String },
    ThematicBreak,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text with the `\n` / `\r\n` terminator removed.
    pub text: String,
    pub kind: LineKind,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in a fixed order and the first match wins: blank,
    /// heading, fence, quote, bullet item, ordered item, thematic break.
    /// Anything else is plain text.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.content();

        LineClass {
            line: lr.span,
            text: text.to_string(),
            kind: Self::kind_of(text),
        }
    }

    fn kind_of(text: &str) -> LineKind {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some((level, heading)) = Heading::parse(text) {
            return LineKind::Heading {
                level,
                text: heading.to_string(),
            };
        }
        if let Some(language) = CodeFence::sig(text) {
            return LineKind::Fence { language };
        }
        if let Some(content) = BlockQuote::strip_prefix(text) {
            return LineKind::Quote {
                content: content.to_string(),
            };
        }
        if let Some(content) = BulletList::strip_marker(text) {
            return LineKind::Bullet {
                content: content.to_string(),
            };
        }
        if let Some(content) = OrderedList::strip_marker(text) {
            return LineKind::Ordered {
                content: content.to_string(),
            };
        }
        if ThematicBreak::matches(text) {
            return LineKind::ThematicBreak;
        }
        LineKind::Text
    }
}
