//! Non-fatal problems recorded during a scan.

use std::path::PathBuf;

use thiserror::Error;

/// A per-note problem that degrades gracefully instead of aborting the scan.
///
/// Warnings are logged as they are found and carried on the final
/// [`VaultScan`](crate::scan::VaultScan) so callers can inspect them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanWarning {
    /// The frontmatter block is not valid YAML; the note is kept with an
    /// empty mapping.
    #[error("{}: malformed frontmatter ({message}); treating as empty", path.display())]
    MalformedFrontmatter { path: PathBuf, message: String },

    /// The `parent` field names a note that does not exist; the note becomes
    /// a root.
    #[error("note '{name}' references missing parent '{parent}'; treating as root")]
    DanglingParent { name: String, parent: String },

    /// The parent chain loops back on itself; the link is severed at `name`.
    #[error("parent chain through '{name}' is circular; breaking the link")]
    CycleDetected { name: String },

    /// The file could not be read; it contributes no row.
    #[error("{}: unreadable ({message}); skipping", path.display())]
    UnreadableFile { path: PathBuf, message: String },

    /// Two files share a stem; the tree keeps the first one discovered.
    #[error("duplicate note name '{name}' at {}; tree keeps the first", path.display())]
    DuplicateName { name: String, path: PathBuf },
}
