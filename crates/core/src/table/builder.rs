//! Notes-table assembly.

use serde_yaml::Value;

use super::columns::ColumnSet;
use crate::vault::NoteRecord;

/// The flat table artifact: a header and one row per note, every row exactly
/// `header.len()` cells wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build the table from discovery-ordered notes.
#[must_use]
pub fn build_table(notes: &[NoteRecord]) -> NoteTable {
    let mut columns = ColumnSet::new();
    for note in notes {
        for (key, _) in note.fields.iter() {
            columns.observe(key);
        }
    }

    let header = columns.as_slice().to_vec();
    let rows = notes
        .iter()
        .map(|note| header.iter().map(|column| cell_value(note, column)).collect())
        .collect();

    NoteTable { header, rows }
}

fn cell_value(note: &NoteRecord, column: &str) -> String {
    match column {
        "name" => note.name.clone(),
        "file_path" => note.relative_path.to_string_lossy().into_owned(),
        "parent" => note.parent.clone().unwrap_or_default(),
        _ => note.fields.get(column).map(render_value).unwrap_or_default(),
    }
}

/// Render a frontmatter value as a single cell.
///
/// Lists join with `", "`; nested structures fall back to compact JSON.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            items.iter().map(render_value).collect::<Vec<_>>().join(", ")
        }
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
