//! Front-matter extraction.
//!
//! A note may open with a metadata header:
//!
//! ```text
//! ---
//! title: Hello
//! published: true
//! tags: [a, "b"]
//! ---
//! Body starts here.
//! ```
//!
//! Only a small YAML-like subset is understood: one `key: value` pair per
//! line, with quoted strings, flow-style arrays and booleans. Anything the
//! grammar does not recognise is skipped rather than reported, and a header
//! that is never closed means the whole input is body.

use crate::models::{FrontMatter, Scalar, front_matter::is_quoted};

/// Line that opens and closes the header.
pub const DELIMITER: &str = "---";

/// Splits `raw` into its front matter and the body that follows it.
///
/// The body is everything after the closing delimiter line, unmodified.
/// Never fails: absent or unterminated headers yield empty front matter and
/// the full input as body.
pub fn extract(raw: &str) -> (FrontMatter, &str) {
    let mut lines = raw.split_inclusive('\n');

    let header_start = match lines.next() {
        Some(first) if trim_line_end(first) == DELIMITER => first.len(),
        _ => return (FrontMatter::new(), raw),
    };
    let mut offset = header_start;

    for line in lines {
        let line_start = offset;
        offset += line.len();
        if trim_line_end(line) == DELIMITER {
            let front_matter = parse_header(&raw[header_start..line_start]);
            return (front_matter, &raw[offset..]);
        }
    }

    log::debug!("front matter opened but never closed; treating input as body");
    (FrontMatter::new(), raw)
}

/// Parses the lines between the delimiters into a [`FrontMatter`].
pub fn parse_header(header: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::new();

    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            log::trace!("skipping front matter line without a key: {line:?}");
            continue;
        }
        front_matter.insert(key, parse_value(value));
    }

    front_matter
}

/// Interprets a single header value.
///
/// Precedence: quoted string, then `[...]` array, then `true`/`false`, then
/// the trimmed text.
pub fn parse_value(value: &str) -> Scalar {
    let value = value.trim();

    if is_quoted(value) {
        return Scalar::String(unquote(value).to_string());
    }

    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| unquote(item).to_string())
            .collect();
        return Scalar::Array(items);
    }

    match value {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => Scalar::String(value.to_string()),
    }
}

/// Strips one layer of matching single or double quotes. No escapes.
fn unquote(value: &str) -> &str {
    if is_quoted(value) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
