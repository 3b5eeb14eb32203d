pub mod convert;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod serialize;


// Re-export key types for easier usage
pub use convert::{Converter, ImportedDocument};
pub use error::ConvertError;
pub use io::*;
pub use models::*;
pub use parsing::front_matter::extract;
pub use parsing::inline::scan_inline;
pub use parsing::links::extract_links;
pub use parsing::parse_blocks;
pub use serialize::{inline_to_markdown, serialize};
