use std::sync::LazyLock;

use regex::Regex;

use crate::models::LinkSet;

use super::inline::{
    InlineSpan,
    parser::{scan_all, try_parse_wikilink},
};

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_-]+)").expect("tag regex"));

/// Collects wikilink targets and hashtags from a note body.
///
/// `front_matter_tags` are merged into the tag set; a leading `#` on them is
/// dropped so both sources agree.
pub fn extract_links(body: &str, front_matter_tags: &[String]) -> LinkSet {
    let mut links = LinkSet::default();

    for span in scan_all(body, try_parse_wikilink) {
        if let InlineSpan::WikiLink { target, .. } = span {
            let target = target.slice(body).trim();
            if !target.is_empty() {
                links.wikilinks.insert(target.to_string());
            }
        }
    }

    for caps in TAG_REGEX.captures_iter(body) {
        if let Some(tag) = caps.get(1) {
            links.tags.insert(tag.as_str().to_string());
        }
    }

    for tag in front_matter_tags {
        let tag = tag.trim().trim_start_matches('#');
        if !tag.is_empty() {
            links.tags.insert(tag.to_string());
        }
    }

    log::trace!(
        "extracted {} wikilinks and {} tags",
        links.wikilinks.len(),
        links.tags.len()
    );
    links
}
