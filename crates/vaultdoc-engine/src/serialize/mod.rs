//! # Serialization
//!
//! Writes a document tree back out as Markdown. Output uses one canonical
//! form per construct (`-` bullets, `---` rules, `*` italics, renumbered
//! ordered lists), so serializing a parsed tree and parsing the result gives
//! the same tree back.

use crate::models::{DocumentNode, InlineNode, ListItem, Mark};
use crate::parsing::blocks::kinds::{
    BlockQuote, BulletList, CodeFence, Heading, OrderedList, ThematicBreak,
};

/// Separator between top-level blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Serializes blocks with the default table placeholder.
pub fn serialize(nodes: &[DocumentNode]) -> String {
    serialize_with(nodes, vaultdoc_config::DEFAULT_TABLE_PLACEHOLDER)
}

/// Serializes blocks, writing `table_placeholder` for every table node.
pub fn serialize_with(nodes: &[DocumentNode], table_placeholder: &str) -> String {
    nodes
        .iter()
        .map(|node| block_to_markdown(node, table_placeholder))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn block_to_markdown(node: &DocumentNode, table_placeholder: &str) -> String {
    match node {
        DocumentNode::Heading { level, children } => {
            let hashes = Heading::MARKER.to_string().repeat(usize::from(level.get()));
            format!("{hashes} {}", inline_to_markdown(children))
        }
        DocumentNode::Paragraph { children } => inline_to_markdown(children),
        DocumentNode::CodeBlock { language, code } => format!(
            "{fence}{lang}\n{code}\n{fence}",
            fence = CodeFence::BACKTICKS,
            lang = language.as_deref().unwrap_or_default(),
        ),
        DocumentNode::BlockQuote { children } => inline_to_markdown(children)
            .split('\n')
            .map(|line| format!("{}{line}", BlockQuote::PREFIX))
            .collect::<Vec<_>>()
            .join("\n"),
        DocumentNode::BulletList { items } => {
            list_to_markdown(items, |_| BulletList::MARKER.to_string())
        }
        DocumentNode::OrderedList { items } => list_to_markdown(items, OrderedList::marker),
        DocumentNode::HorizontalRule => ThematicBreak::CANONICAL.to_string(),
        DocumentNode::Table { .. } => table_placeholder.to_string(),
    }
}

fn list_to_markdown(items: &[ListItem], marker: impl Fn(usize) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}{}", marker(i), inline_to_markdown(&item.children)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders an inline run back to Markdown source.
pub fn inline_to_markdown(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            InlineNode::Text { value } => out.push_str(value),
            InlineNode::Marked { value, mark } => push_marked(&mut out, value, *mark),
            InlineNode::Link { text, href } => {
                out.push('[');
                out.push_str(text);
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
        }
    }
    out
}

fn push_marked(out: &mut String, value: &str, mark: Mark) {
    let delim = match mark.alternate_delimiter() {
        Some(alt) if value.contains(mark.delimiter()) && !value.contains(alt) => alt,
        _ => mark.delimiter(),
    };
    out.push_str(delim);
    out.push_str(value);
    out.push_str(delim);
}
