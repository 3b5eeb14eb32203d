use crate::models::{InlineNode, Mark};
use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, MarkdownLink, Strikethrough, Strong, WikiLink},
    slug::slugify,
    types::InlineSpan,
};

/// A delimited syntax that produces a single mark.
struct MarkSyntax {
    mark: Mark,
    open: &'static [u8],
    close: &'static [u8],
    forbidden: &'static [u8],
    /// Single-character delimiters that may not touch the same character,
    /// so `*` never matches one half of `**`.
    solo: bool,
}

const MARK_SYNTAXES: [MarkSyntax; 6] = [
    MarkSyntax {
        mark: Mark::Bold,
        open: Strong::STARS,
        close: Strong::STARS,
        forbidden: b"",
        solo: false,
    },
    MarkSyntax {
        mark: Mark::Bold,
        open: Strong::UNDERSCORES,
        close: Strong::UNDERSCORES,
        forbidden: b"",
        solo: false,
    },
    MarkSyntax {
        mark: Mark::Italic,
        open: Emphasis::STAR,
        close: Emphasis::STAR,
        forbidden: b"",
        solo: true,
    },
    MarkSyntax {
        mark: Mark::Italic,
        open: Emphasis::UNDERSCORE,
        close: Emphasis::UNDERSCORE,
        forbidden: b"",
        solo: true,
    },
    MarkSyntax {
        mark: Mark::Strike,
        open: Strikethrough::TILDES,
        close: Strikethrough::TILDES,
        forbidden: b"",
        solo: false,
    },
    MarkSyntax {
        mark: Mark::Code,
        open: CodeSpan::TICK,
        close: CodeSpan::TICK,
        forbidden: CodeSpan::TICK,
        solo: false,
    },
];

/// Finds every inline construct in `line` and resolves overlaps.
///
/// Each syntax is scanned on its own across the whole line, so a syntax's
/// matches never overlap each other. The combined candidates are ordered by
/// start offset (longer first, then bold, italic, strike, code, wikilink,
/// link) and any candidate starting inside an already accepted span is
/// dropped. The result is ordered and non-overlapping.
pub fn scan_spans(line: &str) -> Vec<InlineSpan> {
    let mut candidates = Vec::new();
    for syntax in &MARK_SYNTAXES {
        candidates.extend(scan_all(line, |cur| try_parse_marked(cur, syntax)));
    }
    candidates.extend(scan_all(line, try_parse_wikilink));
    candidates.extend(scan_all(line, try_parse_link));

    candidates.sort_by(|a, b| {
        let (fa, fb) = (a.full(), b.full());
        fa.start
            .cmp(&fb.start)
            .then(fb.len().cmp(&fa.len()))
            .then(a.rank().cmp(&b.rank()))
    });

    let mut accepted: Vec<InlineSpan> = Vec::with_capacity(candidates.len());
    let mut covered_to = 0;
    for candidate in candidates {
        let full = candidate.full();
        if full.start < covered_to {
            log::trace!("dropping inline match {full:?} overlapping an earlier span");
            continue;
        }
        covered_to = full.end;
        accepted.push(candidate);
    }
    accepted
}

/// Scans `line` into inline nodes, resolving wikilinks under `wikilink_base`.
///
/// Text between matches is emitted verbatim as [`InlineNode::Text`]. An empty
/// line yields no nodes; a line without matches yields one text node.
pub fn parse_inline(line: &str, wikilink_base: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<InlineNode>, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::text(&line[start..end]));
        }
    }

    for span in scan_spans(line) {
        let full = span.full();
        flush_text(&mut out, line, text_start, full.start);
        text_start = full.end;
        out.push(to_node(line, span, wikilink_base));
    }

    flush_text(&mut out, line, text_start, line.len());
    out
}

/// Builds the href a `[[target]]` resolves to.
pub fn wikilink_href(wikilink_base: &str, target: &str) -> String {
    format!("{wikilink_base}{}", slugify(target))
}

fn to_node(line: &str, span: InlineSpan, wikilink_base: &str) -> InlineNode {
    match span {
        InlineSpan::Marked { mark, inner, .. } => InlineNode::marked(inner.slice(line), mark),
        InlineSpan::WikiLink { target, alias, .. } => {
            let target = target.slice(line);
            let text = match alias.map(|a| a.slice(line)) {
                Some(alias) if !alias.is_empty() => alias,
                _ => target,
            };
            InlineNode::link(text, wikilink_href(wikilink_base, target))
        }
        InlineSpan::Link { text, url, .. } => InlineNode::link(text.slice(line), url.slice(line)),
    }
}

/// Runs a single-syntax matcher across the whole input, restarting after
/// each match and stepping one byte after each miss.
pub(crate) fn scan_all<F>(s: &str, mut try_parse: F) -> Vec<InlineSpan>
where
    F: FnMut(&mut Cursor<'_>) -> Option<InlineSpan>,
{
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(span) = try_parse(&mut cur) {
            out.push(span);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts a delimited mark at the cursor. Restores the cursor on failure.
fn try_parse_marked(cur: &mut Cursor<'_>, syntax: &MarkSyntax) -> Option<InlineSpan> {
    if !cur.starts_with(syntax.open) {
        return None;
    }

    if syntax.solo {
        return try_parse_solo(cur, syntax);
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(syntax.open.len());

    let Some((inner_start, inner_end)) = cur.eat_until(syntax.close, syntax.forbidden) else {
        *cur = saved;
        return None;
    };
    cur.bump_n(syntax.close.len());

    Some(InlineSpan::Marked {
        mark: syntax.mark,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Single-character delimiter variant: both the opening and the closing
/// delimiter must stand alone, not next to another copy of themselves.
fn try_parse_solo(cur: &mut Cursor<'_>, syntax: &MarkSyntax) -> Option<InlineSpan> {
    let line: &str = cur.s;
    let bytes = line.as_bytes();
    let delim = syntax.open[0];
    let start = cur.pos();
    if !is_solo_at(bytes, start, delim) {
        return None;
    }

    let inner_start = start + 1;
    let mut i = inner_start;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' || syntax.forbidden.contains(&b) {
            return None;
        }
        if i > inner_start && is_solo_at(bytes, i, delim) {
            cur.bump_n(i + 1 - start);
            return Some(InlineSpan::Marked {
                mark: syntax.mark,
                full: Span::new(start, i + 1),
                inner: Span::new(inner_start, i),
            });
        }
        i += 1;
    }
    None
}

fn is_solo_at(bytes: &[u8], i: usize, delim: u8) -> bool {
    bytes.get(i) == Some(&delim)
        && (i == 0 || bytes[i - 1] != delim)
        && bytes.get(i + 1) != Some(&delim)
}

/// Attempts `[[target]]` / `[[target|alias]]` at the cursor.
pub(crate) fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(WikiLink::OPEN.len());

    let Some((inner_start, inner_end)) = cur.eat_until(WikiLink::CLOSE, WikiLink::FORBIDDEN)
    else {
        *cur = saved;
        return None;
    };
    cur.bump_n(WikiLink::CLOSE.len());

    let line: &str = cur.s;
    let inner = &line[inner_start..inner_end];
    let (target, alias) = WikiLink::split_alias(inner);
    let target_end = inner_start + target.len();
    let alias = alias.map(|a| Span::new(target_end + 1, target_end + 1 + a.len()));

    Some(InlineSpan::WikiLink {
        full: Span::new(start, cur.pos()),
        target: Span::new(inner_start, target_end),
        alias,
    })
}

/// Attempts `[text](url)` at the cursor.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(MarkdownLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(MarkdownLink::OPEN.len());

    let Some((text_start, text_end)) =
        cur.eat_until(MarkdownLink::TEXT_CLOSE, MarkdownLink::TEXT_FORBIDDEN)
    else {
        *cur = saved;
        return None;
    };
    cur.bump_n(MarkdownLink::TEXT_CLOSE.len());

    let Some((url_start, url_end)) =
        cur.eat_until(MarkdownLink::URL_CLOSE, MarkdownLink::URL_FORBIDDEN)
    else {
        *cur = saved;
        return None;
    };
    cur.bump_n(MarkdownLink::URL_CLOSE.len());

    Some(InlineSpan::Link {
        full: Span::new(start, cur.pos()),
        text: Span::new(text_start, text_end),
        url: Span::new(url_start, url_end),
    })
}
