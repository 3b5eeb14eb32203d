//! # Block Parsing
//!
//! Two-phase block parsing over a rope.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding only local facts (blank, heading, fence, quote,
//!    list marker, rule, plain text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open block (fence, quote or list) and emits `BlockNode`s as lines close
//!    it
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, a `DocumentNode` with its source span
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Block spans are in source order and never overlap
//! - Every non-blank line outside a fence belongs to exactly one block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::BlockNode;
