use relative_path::{RelativePath, RelativePathBuf};

use crate::convert::{Converter, ImportedDocument};
use crate::parsing::inline::slugify;

/// Fallback title for paths without a file name.
const UNTITLED: &str = "Untitled";

/// One imported note of a vault: where it lives, what it is called and what
/// it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct VaultNote {
    relative_path: RelativePathBuf,
    title: String,
    slug: String,
    href: String,
    document: ImportedDocument,
}

impl VaultNote {
    /// Imports `raw` as the note stored at `relative_path`.
    ///
    /// The title is the front-matter `title` when it is a non-empty string,
    /// otherwise the file name without its `.md` extension.
    pub fn new(relative_path: RelativePathBuf, raw: &str, converter: &Converter) -> Self {
        let document = converter.import(raw);
        let title = document
            .front_matter
            .get_str("title")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Self::title_from_path(&relative_path));
        let slug = slugify(&title);
        let href = converter.page_href(&title);

        Self {
            relative_path,
            title,
            slug,
            href,
            document,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str, raw: &str, converter: &Converter) -> Self {
        Self::new(RelativePathBuf::from(path), raw, converter)
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Link target for this note, the same one `[[Title]]` resolves to.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn document(&self) -> &ImportedDocument {
        &self.document
    }

    pub fn into_document(self) -> ImportedDocument {
        self.document
    }

    /// File name with the `.md` extension stripped.
    fn title_from_path(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Go Notes.md", "Go Notes", "go-notes")]
    #[case("journal/2024-01-02.md", "2024-01-02", "2024-01-02")]
    #[case("deep/nested/README", "README", "readme")]
    fn title_from_file_name(#[case] path: &str, #[case] title: &str, #[case] slug: &str) {
        let note = VaultNote::from_relative_str(path, "body", &Converter::default());
        assert_eq!(note.title(), title);
        assert_eq!(note.slug(), slug);
        assert_eq!(note.relative_path().as_str(), path);
    }

    #[test]
    fn front_matter_title_wins() {
        let raw = "---\ntitle: Rust & Friends\n---\nbody";
        let note = VaultNote::from_relative_str("misc/file.md", raw, &Converter::default());

        assert_eq!(note.title(), "Rust & Friends");
        assert_eq!(note.slug(), "rust-friends");
        assert_eq!(note.href(), "/workspace/pages/rust-friends");
    }

    #[test]
    fn blank_front_matter_title_falls_back_to_path() {
        let raw = "---\ntitle: \"  \"\n---\nbody";
        let note = VaultNote::from_relative_str("Fallback.md", raw, &Converter::default());
        assert_eq!(note.title(), "Fallback");
    }

    #[test]
    fn non_string_title_falls_back_to_path() {
        let raw = "---\ntitle: true\n---\n";
        let note = VaultNote::from_relative_str("Flag.md", raw, &Converter::default());
        assert_eq!(note.title(), "Flag");
    }

    #[test]
    fn href_matches_wikilinks_to_the_note() {
        let converter = Converter::default();
        let target = VaultNote::from_relative_str("Page A.md", "", &converter);
        let linking = converter.scan_inline("[[Page A]]");

        assert_eq!(
            linking,
            vec![crate::models::InlineNode::link("Page A", target.href())]
        );
    }

    #[test]
    fn document_is_carried() {
        let note = VaultNote::from_relative_str("n.md", "# Head\n[[Other]]", &Converter::default());
        assert_eq!(note.document().nodes.len(), 2);
        assert!(note.document().links.wikilinks.contains("Other"));
        assert_eq!(note.into_document().nodes.len(), 2);
    }
}
