use std::sync::LazyLock;

use regex::Regex;

static THEMATIC_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").expect("thematic break regex"));

/// Horizontal rule: a line of three or more `-`, `*` or `_` and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    /// Canonical form written when serializing.
    pub const CANONICAL: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        THEMATIC_BREAK_REGEX.is_match(line)
    }
}
