use std::sync::LazyLock;

use regex::Regex;

use crate::models::HeadingLevel;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading regex"));

/// ATX heading: one to six `#`, whitespace, then the heading text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns the level and text of a heading line.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        let caps = HEADING_REGEX.captures(line)?;
        let hashes = caps.get(1)?.as_str();
        let text = caps.get(2)?.as_str();
        let level = u8::try_from(hashes.len()).ok()?;
        HeadingLevel::new(level).ok().map(|level| (level, text))
    }
}
