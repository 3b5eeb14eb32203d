pub mod document;
pub mod front_matter;
pub mod inline;
pub mod link_set;
pub mod vault_note;

pub use document::{DocumentNode, HeadingLevel, ListItem};
pub use front_matter::{FrontMatter, Scalar};
pub use inline::{InlineNode, Mark, plain_text};
pub use link_set::LinkSet;
pub use vault_note::VaultNote;
