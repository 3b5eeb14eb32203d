pub mod blocks;
pub mod front_matter;
pub mod inline;
pub mod links;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::models::DocumentNode;
use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn into_nodes(self) -> Vec<DocumentNode> {
        self.blocks.into_iter().map(|b| b.node).collect()
    }
}

/// Parses a Markdown body (front matter already removed) into spanned blocks.
pub fn parse_document(rope: &Rope, wikilink_base: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(wikilink_base);

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::trace!("parsed {} blocks from {} bytes", blocks.len(), rope.len());
    ParsedDoc { blocks }
}

/// Parses a body into document nodes, resolving wikilinks against `wikilink_base`.
pub fn parse_blocks_with_base(body: &str, wikilink_base: &str) -> Vec<DocumentNode> {
    let rope = Rope::from(body);
    parse_document(&rope, wikilink_base).into_nodes()
}

/// Parses a body into document nodes with the default wikilink base.
pub fn parse_blocks(body: &str) -> Vec<DocumentNode> {
    parse_blocks_with_base(body, vaultdoc_config::DEFAULT_WIKILINK_BASE)
}
