//! Vault file discovery and note extraction.
//!
//! The walker enumerates markdown files under the vault root in a stable,
//! sorted order; extraction turns each file into the record the table and
//! tree artifacts are built from.

pub mod note;
pub mod walker;

pub use note::{NoteRecord, extract_record, note_name};
pub use walker::{VaultWalker, WalkedFile, WalkerError};
