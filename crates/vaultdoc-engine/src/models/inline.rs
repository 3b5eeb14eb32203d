use serde::{Deserialize, Serialize};

/// A formatting attribute carried by a [`InlineNode::Marked`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Strike,
    Code,
}

impl Mark {
    /// The delimiter written on both sides of the marked text.
    pub fn delimiter(self) -> &'static str {
        match self {
            Mark::Bold => "**",
            Mark::Italic => "*",
            Mark::Strike => "~~",
            Mark::Code => "`",
        }
    }

    /// The underscore spelling of bold and italic, for values that contain
    /// the star delimiter.
    pub fn alternate_delimiter(self) -> Option<&'static str> {
        match self {
            Mark::Bold => Some("__"),
            Mark::Italic => Some("_"),
            Mark::Strike | Mark::Code => None,
        }
    }
}

/// A leaf of a line's inline content.
///
/// Marked runs carry exactly one mark; stacked marks are not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    Text { value: String },
    Marked { value: String, mark: Mark },
    Link { text: String, href: String },
}

impl InlineNode {
    pub fn text(value: impl Into<String>) -> Self {
        InlineNode::Text {
            value: value.into(),
        }
    }

    pub fn marked(value: impl Into<String>, mark: Mark) -> Self {
        InlineNode::Marked {
            value: value.into(),
            mark,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        InlineNode::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    /// The visible text of this node, without any mark or link syntax.
    pub fn plain_text(&self) -> &str {
        match self {
            InlineNode::Text { value } | InlineNode::Marked { value, .. } => value,
            InlineNode::Link { text, .. } => text,
        }
    }
}

/// Concatenates the visible text of a run of inline nodes.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}
