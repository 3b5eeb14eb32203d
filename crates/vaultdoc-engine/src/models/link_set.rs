use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Wikilink targets and hashtags found in a note. Deduplicated; the sets
/// are ordered only so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    pub wikilinks: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl LinkSet {
    pub fn is_empty(&self) -> bool {
        self.wikilinks.is_empty() && self.tags.is_empty()
    }
}
