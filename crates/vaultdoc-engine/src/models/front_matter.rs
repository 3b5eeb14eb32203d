use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One front-matter value: the restricted shapes the extractor understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    String(String),
    Array(Vec<String>),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Scalar::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<Vec<String>> for Scalar {
    fn from(value: Vec<String>) -> Self {
        Scalar::Array(value)
    }
}

/// Metadata header of a source file. Keys are case-sensitive.
///
/// Backed by a `BTreeMap` so iteration and [`FrontMatter::to_header`] are
/// deterministic; key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    entries: BTreeMap<String, Scalar>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// A list-valued field. A plain string counts as a one-element list;
    /// missing or boolean fields give an empty list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return vec![];
        };
        if let Some(items) = value.as_array() {
            return items.to_vec();
        }
        match value.as_str() {
            Some(s) if !s.is_empty() => vec![s.to_string()],
            _ => vec![],
        }
    }

    /// The `tags` field, each tag stripped of a leading `#`.
    pub fn tags(&self) -> Vec<String> {
        self.get_list("tags")
            .into_iter()
            .map(|t| t.strip_prefix('#').map(str::to_string).unwrap_or(t))
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders a `---` delimited header that the extractor reads back into
    /// an equal value. Empty front matter renders as an empty string.
    ///
    /// Values containing newlines, and array elements containing commas,
    /// cannot be represented by the header grammar.
    pub fn to_header(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = String::from("---\n");
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str(": ");
            match value {
                Scalar::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                Scalar::String(s) => out.push_str(&quote_if_ambiguous(s, true)),
                Scalar::Array(items) => {
                    out.push('[');
                    let rendered: Vec<_> = items
                        .iter()
                        .map(|item| quote_if_ambiguous(item, false))
                        .collect();
                    out.push_str(&rendered.join(", "));
                    out.push(']');
                }
            }
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Wraps `value` in double quotes when reading it back unquoted would give a
/// different value.
fn quote_if_ambiguous(value: &str, top_level: bool) -> String {
    let needs_quotes = value.trim() != value
        || (!top_level && value.is_empty())
        || is_quoted(value)
        || (top_level && (value == "true" || value == "false"))
        || (top_level && value.starts_with('[') && value.ends_with(']'));

    if needs_quotes {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

pub(crate) fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accessors_match_value_shapes() {
        let fm: FrontMatter = [
            ("title", Scalar::from("Hello")),
            ("published", Scalar::from(true)),
            ("tags", Scalar::from(vec!["a".to_string(), "#b".to_string()])),
        ]
        .into_iter()
        .collect();

        assert_eq!(fm.get_str("title"), Some("Hello"));
        assert_eq!(fm.get_bool("published"), Some(true));
        assert_eq!(fm.get_str("published"), None);
        assert_eq!(fm.tags(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(fm.len(), 3);
    }

    #[test]
    fn single_string_is_a_one_element_list() {
        let mut fm = FrontMatter::new();
        fm.insert("tags", "rust");
        assert_eq!(fm.get_list("tags"), vec!["rust".to_string()]);
        assert!(fm.get_list("missing").is_empty());
    }

    #[test]
    fn header_is_empty_for_empty_front_matter() {
        assert_eq!(FrontMatter::new().to_header(), "");
    }

    #[test]
    fn header_renders_sorted_keys() {
        let mut fm = FrontMatter::new();
        fm.insert("title", "Hello");
        fm.insert("published", true);
        fm.insert("tags", vec!["a".to_string(), "b".to_string()]);

        assert_eq!(
            fm.to_header(),
            "---\npublished: true\ntags: [a, b]\ntitle: Hello\n---\n"
        );
    }

    #[test]
    fn header_quotes_strings_that_would_change_shape() {
        let mut fm = FrontMatter::new();
        fm.insert("flag", "true");
        fm.insert("list", "[x]");
        fm.insert("padded", " x ");

        assert_eq!(
            fm.to_header(),
            "---\nflag: \"true\"\nlist: \"[x]\"\npadded: \" x \"\n---\n"
        );
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let mut fm = FrontMatter::new();
        fm.insert("title", "Hello");
        fm.insert("draft", false);
        let json = serde_json::to_value(&fm).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Hello", "draft": false }));
    }
}
