use crate::models::DocumentNode;
use crate::parsing::rope::span::Span;

/// A parsed block together with the source lines it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub node: DocumentNode,
    /// Byte span of the block's lines, terminators and fence lines included.
    pub span: Span,
}
