//! Frontmatter types and data structures.

use serde_yaml::{Mapping, Value};

/// Parsed YAML frontmatter from a markdown document.
///
/// Fields keep their document order: the column layout of the CSV artifact
/// depends on first-seen ordering across the whole vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Fields as key-value pairs, in document order.
    pub fields: Mapping,
}

impl Frontmatter {
    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(Value::String(key.to_string()))
    }

    /// Look up a string-valued field by name.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate string-keyed fields in document order.
    ///
    /// Non-string keys are legal YAML but meaningless as column names, so
    /// they are skipped here.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().filter_map(|(k, v)| k.as_str().map(|key| (key, v)))
    }
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}
