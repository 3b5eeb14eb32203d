//! # Inline Kinds
//!
//! Types that own the delimiters of each inline syntax. Scanners read these
//! constants; they never hardcode `**`, `[[` or `` ` `` themselves.
//!
//! - **`Strong`**: `**` and `__`
//! - **`Emphasis`**: `*` and `_`
//! - **`Strikethrough`**: `~~`
//! - **`CodeSpan`**: `` ` ``, content may not contain another tick
//! - **`WikiLink`**: `[[target]]`, `[[target|alias]]`
//! - **`MarkdownLink`**: `[text](url)`

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough, Strong};
pub use link::MarkdownLink;
pub use wikilink::WikiLink;
