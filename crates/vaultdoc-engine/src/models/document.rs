use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

use super::inline::InlineNode;

/// A heading depth, guaranteed to be within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self, ConvertError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ConvertError::InvalidHeadingLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = ConvertError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

/// One entry of a bullet or ordered list: a single inline run, no nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<InlineNode>,
}

impl ListItem {
    pub fn new(children: Vec<InlineNode>) -> Self {
        Self { children }
    }
}

/// A top-level block of the document tree.
///
/// The document root is a `Vec<DocumentNode>` in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentNode {
    Heading {
        level: HeadingLevel,
        children: Vec<InlineNode>,
    },
    Paragraph {
        children: Vec<InlineNode>,
    },
    CodeBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },
    /// A quote holding one paragraph-equivalent inline run.
    BlockQuote {
        children: Vec<InlineNode>,
    },
    BulletList {
        items: Vec<ListItem>,
    },
    OrderedList {
        items: Vec<ListItem>,
    },
    HorizontalRule,
    /// Table content is never decomposed; `raw` is whatever the producing
    /// editor stored and is passed through untouched.
    Table {
        raw: serde_json::Value,
    },
}

impl DocumentNode {
    /// Short name of the variant, matching the serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocumentNode::Heading { .. } => "heading",
            DocumentNode::Paragraph { .. } => "paragraph",
            DocumentNode::CodeBlock { .. } => "code_block",
            DocumentNode::BlockQuote { .. } => "block_quote",
            DocumentNode::BulletList { .. } => "bullet_list",
            DocumentNode::OrderedList { .. } => "ordered_list",
            DocumentNode::HorizontalRule => "horizontal_rule",
            DocumentNode::Table { .. } => "table",
        }
    }
}
