//! # Inline Scanning
//!
//! Turns one line of text into a flat run of [`InlineNode`]s.
//!
//! ## Architecture
//!
//! Every syntax (bold, italic, strike, code, wikilink, link) is matched by
//! its own cursor loop over the full line. The candidate spans are then
//! merged by start offset, and anything overlapping an earlier accepted span
//! is discarded, so each byte of the line belongs to at most one construct.
//! Gaps become plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan`, a match located by byte spans
//! - **`kinds`**: delimiter constants per syntax
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `scan_spans()` and `parse_inline()`
//! - **`slug`**: `slugify()` for wikilink targets
//!
//! ## Precedence
//!
//! The earliest-starting match wins. On equal starts the longer match wins,
//! and after that bold, italic, strike, code, wikilink, link in that order.
//! `**[[Page]]**` is therefore bold text `[[Page]]`, not a link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod slug;
pub mod types;

pub use parser::{parse_inline, scan_spans, wikilink_href};
pub use slug::slugify;
pub use types::InlineSpan;

use crate::models::InlineNode;

/// Scans a line with the default wikilink base.
pub fn scan_inline(line: &str) -> Vec<InlineNode> {
    parse_inline(line, vaultdoc_config::DEFAULT_WIKILINK_BASE)
}
