//! The flat notes table and its CSV artifact.
//!
//! One row per note in discovery order; the column set is the promoted
//! columns (`name`, `file_path`, `parent`, `status`, `category`) followed by
//! every other frontmatter field observed across the vault, in first-seen
//! order.

pub mod builder;
pub mod columns;
pub mod writer;

pub use builder::{NoteTable, build_table, render_value};
pub use columns::{ColumnSet, PROMOTED_COLUMNS};
pub use writer::write_csv;
