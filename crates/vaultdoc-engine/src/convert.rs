use serde::{Deserialize, Serialize};
use vaultdoc_config::{Config, ConversionConfig};

use crate::error::ConvertError;
use crate::models::{DocumentNode, FrontMatter, InlineNode, LinkSet};
use crate::parsing::front_matter::{self, DELIMITER as FRONT_MATTER_DELIMITER};
use crate::parsing::{inline, links, parse_blocks_with_base};
use crate::serialize::serialize_with;

/// Everything pulled out of one Markdown file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedDocument {
    pub front_matter: FrontMatter,
    pub nodes: Vec<DocumentNode>,
    pub links: LinkSet,
}

/// The full Markdown <-> tree pipeline with one set of conversion options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.conversion.clone())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Splits off front matter, parses the body and collects its links.
    ///
    /// Front-matter `tags` are merged into the link set's tags.
    pub fn import(&self, raw: &str) -> ImportedDocument {
        let (front_matter, body) = front_matter::extract(raw);
        let nodes = self.parse_blocks(body);
        let links = links::extract_links(body, &front_matter.tags());

        log::trace!(
            "imported {} front matter keys, {} blocks, {} wikilinks",
            front_matter.len(),
            nodes.len(),
            links.wikilinks.len()
        );

        ImportedDocument {
            front_matter,
            nodes,
            links,
        }
    }

    pub fn import_bytes(&self, raw: &[u8]) -> Result<ImportedDocument, ConvertError> {
        let raw = std::str::from_utf8(raw)?;
        Ok(self.import(raw))
    }

    pub fn parse_blocks(&self, body: &str) -> Vec<DocumentNode> {
        parse_blocks_with_base(body, &self.config.wikilink_base)
    }

    pub fn scan_inline(&self, line: &str) -> Vec<InlineNode> {
        inline::parse_inline(line, &self.config.wikilink_base)
    }

    pub fn export(&self, nodes: &[DocumentNode]) -> String {
        serialize_with(nodes, &self.config.table_placeholder)
    }

    /// Renders a whole file: front matter header, then the body with a
    /// trailing newline.
    ///
    /// A body whose first line is `---` always gets a header, empty if need
    /// be, so the extractor never mistakes leading rules for front matter.
    pub fn export_file(&self, front_matter: &FrontMatter, nodes: &[DocumentNode]) -> String {
        let body = self.export(nodes);
        let mut out = front_matter.to_header();
        if out.is_empty() && body.lines().next() == Some(FRONT_MATTER_DELIMITER) {
            out = format!("{FRONT_MATTER_DELIMITER}\n{FRONT_MATTER_DELIMITER}\n");
        }
        if !body.is_empty() {
            out.push_str(&body);
            out.push('\n');
        }
        out
    }

    /// Where a page with this title is linked, matching wikilink hrefs.
    pub fn page_href(&self, title: &str) -> String {
        inline::wikilink_href(&self.config.wikilink_base, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeadingLevel, Mark, Scalar};
    use pretty_assertions::assert_eq;

    const NOTE: &str = "---\ntitle: Go Notes\ntags: [golang, \"#lang\"]\ndraft: false\n---\n\
                        # Go Notes\n\nSee [[Rust Notes|the rust page]] and #concurrency\n";

    #[test]
    fn import_runs_every_stage() {
        let doc = Converter::default().import(NOTE);

        assert_eq!(doc.front_matter.get_str("title"), Some("Go Notes"));
        assert_eq!(doc.front_matter.get_bool("draft"), Some(false));
        assert_eq!(
            doc.nodes,
            vec![
                DocumentNode::Heading {
                    level: HeadingLevel::new(1).unwrap(),
                    children: vec![InlineNode::text("Go Notes")],
                },
                DocumentNode::Paragraph {
                    children: vec![
                        InlineNode::text("See "),
                        InlineNode::link("the rust page", "/workspace/pages/rust-notes"),
                        InlineNode::text(" and #concurrency"),
                    ],
                },
            ]
        );
        assert_eq!(
            doc.links.wikilinks.iter().collect::<Vec<_>>(),
            vec!["Rust Notes"]
        );
        assert_eq!(
            doc.links.tags.iter().collect::<Vec<_>>(),
            vec!["concurrency", "golang", "lang"]
        );
    }

    #[test]
    fn import_without_front_matter() {
        let doc = Converter::default().import("just text");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.nodes.len(), 1);
    }

    #[test]
    fn import_bytes_rejects_invalid_utf8() {
        let err = Converter::default()
            .import_bytes(&[b'#', b' ', 0xff, 0xfe])
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidInput { .. }));
    }

    #[test]
    fn import_bytes_accepts_utf8() {
        let doc = Converter::default()
            .import_bytes("café *à*".as_bytes())
            .unwrap();
        assert_eq!(
            doc.nodes,
            vec![DocumentNode::Paragraph {
                children: vec![
                    InlineNode::text("café "),
                    InlineNode::marked("à", Mark::Italic),
                ],
            }]
        );
    }

    #[test]
    fn configured_options_are_used() {
        let converter = Converter::new(ConversionConfig {
            wikilink_base: "/wiki/".to_string(),
            table_placeholder: "(table)".to_string(),
        });

        assert_eq!(
            converter.scan_inline("[[My Page]]"),
            vec![InlineNode::link("My Page", "/wiki/my-page")]
        );
        assert_eq!(converter.page_href("My Page"), "/wiki/my-page");
        assert_eq!(
            converter.export(&[DocumentNode::Table {
                raw: serde_json::json!([])
            }]),
            "(table)"
        );
    }

    #[test]
    fn from_config_takes_conversion_section() {
        let config = Config::from_toml_str("[conversion]\nwikilink_base = \"/p/\"\n").unwrap();
        let converter = Converter::from_config(&config);
        assert_eq!(converter.config().wikilink_base, "/p/");
        assert_eq!(converter.config().table_placeholder, "[table]");
    }

    #[test]
    fn export_file_round_trips() {
        let converter = Converter::default();
        let doc = converter.import(NOTE);

        let written = converter.export_file(&doc.front_matter, &doc.nodes);
        let reread = converter.import(&written);

        assert_eq!(reread.front_matter, doc.front_matter);
        assert_eq!(reread.nodes, doc.nodes);
    }

    #[test]
    fn export_file_without_front_matter_is_just_the_body() {
        let nodes = vec![DocumentNode::Paragraph {
            children: vec![InlineNode::text("body")],
        }];
        assert_eq!(
            Converter::default().export_file(&FrontMatter::new(), &nodes),
            "body\n"
        );
    }

    #[test]
    fn export_file_guards_leading_rule_with_empty_header() {
        let converter = Converter::default();
        let nodes = vec![
            DocumentNode::HorizontalRule,
            DocumentNode::Paragraph {
                children: vec![InlineNode::text("status: draft")],
            },
            DocumentNode::HorizontalRule,
            DocumentNode::Paragraph {
                children: vec![InlineNode::text("kept")],
            },
        ];

        let written = converter.export_file(&FrontMatter::new(), &nodes);
        assert_eq!(written, "---\n---\n---\n\nstatus: draft\n\n---\n\nkept\n");

        let reread = converter.import(&written);
        assert!(reread.front_matter.is_empty());
        assert_eq!(reread.nodes, nodes);
    }

    #[test]
    fn imported_document_serializes_to_json() {
        let mut front_matter = FrontMatter::new();
        front_matter.insert("title", Scalar::from("T"));
        let doc = ImportedDocument {
            front_matter,
            nodes: vec![DocumentNode::HorizontalRule],
            links: LinkSet::default(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "front_matter": {"title": "T"},
                "nodes": [{"type": "horizontal_rule"}],
                "links": {"wikilinks": [], "tags": []},
            })
        );
    }
}
