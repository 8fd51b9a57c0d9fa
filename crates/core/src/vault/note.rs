//! Note record extraction: name, title, parent link, frontmatter fields.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use super::walker::WalkedFile;
use crate::frontmatter::{self, Frontmatter};
use crate::scan::ScanWarning;

/// One scanned note: everything the table and tree artifacts need.
#[derive(Debug, Clone)]
pub struct NoteRecord {
    /// File stem; the identifier parent links resolve against.
    pub name: String,
    /// Path relative to the vault root; the identifier used in the table.
    pub relative_path: PathBuf,
    /// Frontmatter `title`, when present as a string.
    pub title: Option<String>,
    /// Extracted `parent` target, when present.
    pub parent: Option<String>,
    /// All frontmatter fields, in document order.
    pub fields: Frontmatter,
}

// Matches [[target]], [[target|alias]] and [[target#section]];
// only the bare target is captured.
static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\]|#]+)(?:#[^\]|]*)?(?:\|[^\]]*)?\]\]").unwrap()
});

/// Extract a note record from file content.
///
/// Malformed frontmatter degrades to an empty mapping; problems are returned
/// alongside the record rather than aborting the scan.
pub fn extract_record(content: &str, file: &WalkedFile) -> (NoteRecord, Vec<ScanWarning>) {
    let mut warnings = Vec::new();

    let fields = match frontmatter::parse(content) {
        Ok(parsed) => parsed.frontmatter.unwrap_or_default(),
        Err(e) => {
            warnings.push(ScanWarning::MalformedFrontmatter {
                path: file.relative_path.clone(),
                message: e.to_string(),
            });
            Frontmatter::default()
        }
    };

    let name = note_name(&file.relative_path);
    let title = fields.get_str("title").map(ToOwned::to_owned);
    let parent = fields
        .get("parent")
        .and_then(|value| extract_parent(value, &file.relative_path, &mut warnings));

    let record = NoteRecord {
        name,
        relative_path: file.relative_path.clone(),
        title,
        parent,
        fields,
    };
    (record, warnings)
}

/// Note identifier: the file stem.
#[must_use]
pub fn note_name(relative_path: &Path) -> String {
    relative_path.file_stem().and_then(|s| s.to_str()).unwrap_or("Untitled").to_string()
}

/// Resolve the `parent` field value to a target note name.
fn extract_parent(
    value: &Value,
    path: &Path,
    warnings: &mut Vec<ScanWarning>,
) -> Option<String> {
    match value {
        Value::String(s) => parse_parent_target(s),
        Value::Sequence(seq) => {
            // An unquoted wikilink (`parent: [[x]]`) reaches us as a nested
            // sequence in YAML.
            if let [Value::Sequence(inner)] = seq.as_slice() {
                return inner.first().and_then(Value::as_str).and_then(parse_parent_target);
            }
            if seq.len() > 1 {
                warnings.push(ScanWarning::MalformedFrontmatter {
                    path: path.to_path_buf(),
                    message: format!(
                        "parent lists {} entries; using the first",
                        seq.len()
                    ),
                });
            }
            seq.first().and_then(Value::as_str).and_then(parse_parent_target)
        }
        Value::Null => None,
        other => {
            warnings.push(ScanWarning::MalformedFrontmatter {
                path: path.to_path_buf(),
                message: format!("parent is not a note reference: {other:?}"),
            });
            None
        }
    }
}

/// Pull the target name out of a parent value: `[[target]]` (with optional
/// `|alias` or `#section`) or a bare note name.
fn parse_parent_target(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let inner = match WIKILINK_RE.captures(trimmed).and_then(|cap| cap.get(1)) {
        Some(m) => m.as_str(),
        // Bracketed but empty or unparseable wikilink
        None if trimmed.contains("[[") => return None,
        None => trimmed,
    };
    let target = inner.split(['|', '#']).next().unwrap_or(inner).trim();
    (!target.is_empty()).then(|| target.to_string())
}
