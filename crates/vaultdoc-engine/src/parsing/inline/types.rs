use crate::models::Mark;
use crate::parsing::rope::span::Span;

/// A matched inline construct, located by byte spans into the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineSpan {
    /// Emphasis, strikethrough or code: delimiter on both sides of `inner`.
    Marked {
        mark: Mark,
        /// Full span including delimiters.
        full: Span,
        /// Text between the delimiters.
        inner: Span,
    },
    /// `[[target]]` or `[[target|alias]]`.
    WikiLink {
        full: Span,
        target: Span,
        alias: Option<Span>,
    },
    /// `[text](url)`.
    Link { full: Span, text: Span, url: Span },
}

impl InlineSpan {
    /// The full span including delimiters.
    pub fn full(&self) -> Span {
        match self {
            InlineSpan::Marked { full, .. }
            | InlineSpan::WikiLink { full, .. }
            | InlineSpan::Link { full, .. } => *full,
        }
    }

    /// Tie-break rank when two candidates start at the same offset and have
    /// the same length. Lower wins.
    pub fn rank(&self) -> u8 {
        match self {
            InlineSpan::Marked {
                mark: Mark::Bold, ..
            } => 0,
            InlineSpan::Marked {
                mark: Mark::Italic,
                ..
            } => 1,
            InlineSpan::Marked {
                mark: Mark::Strike,
                ..
            } => 2,
            InlineSpan::Marked {
                mark: Mark::Code, ..
            } => 3,
            InlineSpan::WikiLink { .. } => 4,
            InlineSpan::Link { .. } => 5,
        }
    }
}
