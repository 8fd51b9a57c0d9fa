//! Recursive vault directory walker.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("vault root does not exist or is not a directory: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    Walk(String, #[source] walkdir::Error),
}

/// A markdown file discovered under the vault root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the vault root.
    pub relative_path: PathBuf,
}

/// Walker for discovering markdown files in a vault.
///
/// Hidden directories (`.obsidian`, `.git`, ...) and common non-vault
/// directories are always pruned; additional folders and individual files
/// (the scan's own artifacts) can be excluded on top.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
    /// Individual files to exclude (relative paths from vault root).
    excluded_files: Vec<PathBuf>,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, WalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Excluded folders can be given relative to the vault root or as
    /// absolute paths (converted to relative).
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, WalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(WalkerError::MissingRoot(root.display().to_string()));
        }

        let excluded_folders =
            excluded_folders.into_iter().map(|p| relative_to(&root, p)).collect();

        Ok(Self { root, excluded_folders, excluded_files: Vec::new() })
    }

    /// Also skip these vault-relative files during the walk.
    ///
    /// Used to keep the scan's own output artifacts from being rediscovered
    /// as notes on the next run.
    pub fn exclude_files(&mut self, files: Vec<PathBuf>) {
        self.excluded_files.extend(files.into_iter().map(|p| relative_to(&self.root, p)));
    }

    /// Walk the vault and return all markdown files, sorted by relative path.
    ///
    /// This sorted order is the "discovery order" the table and tree
    /// artifacts are derived in.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, WalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry
                .map_err(|e| WalkerError::Walk(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            if self.excluded_files.iter().any(|f| f == &relative_path) {
                continue;
            }

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        // Skip common non-vault directories
        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            for excluded in &self.excluded_folders {
                if relative.starts_with(excluded) {
                    return true;
                }
            }
        }

        false
    }

    /// Get the vault root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn relative_to(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path.strip_prefix(root).map_or(path.clone(), Path::to_path_buf)
    } else {
        path
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
