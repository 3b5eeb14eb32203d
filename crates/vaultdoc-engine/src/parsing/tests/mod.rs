//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their expected trees (.json) are co-located in
//! `fixtures/`. The JSON is the serde form of `Vec<DocumentNode>`.


use pretty_assertions::assert_eq;
use rstest::rstest;
use vaultdoc_config::DEFAULT_WIKILINK_BASE;

use crate::models::{DocumentNode, InlineNode, Mark, plain_text};
use crate::parsing::{inline::scan_spans, parse_blocks, parse_document};
use crate::serialize::serialize;

// Fixture-based tests

#[rstest]
#[case("simple_paragraph")]
#[case("code_fences")]
#[case("lists_and_quotes")]
#[case("wikilinks_raw_zones")]
#[case("mixed_note")]
fn fixture(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.json")).unwrap();
    let expected: Vec<DocumentNode> = serde_json::from_str(&expected).unwrap();

    let rope = xi_rope::Rope::from(md.as_str());
    let doc = parse_document(&rope, DEFAULT_WIKILINK_BASE);
    invariants::check(&rope, &doc.blocks);

    let nodes = doc.into_nodes();
    assert_eq!(nodes, expected, "fixture {name}");
    assert_eq!(parse_blocks(&serialize(&nodes)), nodes, "round trip of {name}");
}

// Invariant tests

/// Concatenating the text of every inline node gives back the source line
/// minus delimiters, for lines without link syntax.
#[rstest]
#[case("plain words only", "plain words only")]
#[case("a **b** c *d* e ~~f~~ g `h` i", "a b c d e f g h i")]
#[case("unmatched **bold and *italic", "unmatched **bold and *italic")]
#[case("__under__ and _score_", "under and score")]
fn plain_text_is_preserved(#[case] line: &str, #[case] expected: &str) {
    let nodes = crate::parsing::inline::scan_inline(line);
    assert_eq!(plain_text(&nodes), expected);
}

#[rstest]
#[case("**a** *b* [[c]] [d](e) `f` ~~g~~")]
#[case("**[[Page]]** and `**x**` and [**y**](z)")]
#[case("*a **b** c* __d_ e__")]
fn inline_spans_never_overlap(#[case] line: &str) {
    let spans = scan_spans(line);
    for pair in spans.windows(2) {
        assert!(
            pair[0].full().end <= pair[1].full().start,
            "{:?} overlaps {:?} in {line:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn heading_with_bold_round_trips() {
    let tree = parse_blocks("## Hi **there**");
    assert_eq!(serialize(&tree), "## Hi **there**");
    match &tree[..] {
        [DocumentNode::Heading { level, children }] => {
            assert_eq!(level.get(), 2);
            assert_eq!(
                children,
                &vec![
                    InlineNode::text("Hi "),
                    InlineNode::marked("there", Mark::Bold)
                ]
            );
        }
        other => panic!("expected one heading, got {other:?}"),
    }
}

#[test]
fn unterminated_fence_is_a_code_block() {
    assert_eq!(
        parse_blocks("```go\nfunc main() {}\n"),
        vec![DocumentNode::CodeBlock {
            language: Some("go".to_string()),
            code: "func main() {}".to_string(),
        }]
    );
}

/// Test that raw zones (code spans) don't produce wikilinks.
#[test]
fn raw_zones_suppress_inline_parsing() {
    assert_eq!(
        parse_blocks("`[[not a link]]`"),
        vec![DocumentNode::Paragraph {
            children: vec![InlineNode::marked("[[not a link]]", Mark::Code)]
        }]
    );
}

/// Test unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let md = "[[unclosed and `also unclosed";
    assert_eq!(
        parse_blocks(md),
        vec![DocumentNode::Paragraph {
            children: vec![InlineNode::text(md)]
        }]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_blocks("").is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(parse_blocks("\n  \n\t\n").is_empty());
}

#[test]
fn crlf_documents_parse_like_lf() {
    let lf = parse_blocks("# T\n\n- a\n- b\n\n```\nx\n```\n");
    let crlf = parse_blocks("# T\r\n\r\n- a\r\n- b\r\n\r\n```\r\nx\r\n```\r\n");
    assert_eq!(crlf, lf);
}
