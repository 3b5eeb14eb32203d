use std::sync::LazyLock;

use regex::Regex;

static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+").expect("bullet regex"));

static ORDERED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").expect("ordered list regex"));

/// `-`, `*` or `+` list items.
pub struct BulletList;

impl BulletList {
    /// Marker written when serializing.
    pub const MARKER: &'static str = "- ";

    /// Returns the item text after the marker.
    pub fn strip_marker(line: &str) -> Option<&str> {
        BULLET_REGEX.find(line).map(|m| &line[m.end()..])
    }
}

/// `1.` style list items. The numbers themselves are not kept.
pub struct OrderedList;

impl OrderedList {
    /// Returns the item text after the number.
    pub fn strip_marker(line: &str) -> Option<&str> {
        ORDERED_REGEX.find(line).map(|m| &line[m.end()..])
    }

    /// Marker for the item at zero-based `index`.
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }
}
