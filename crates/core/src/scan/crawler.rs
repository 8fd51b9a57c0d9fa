//! Scan orchestration: walk, extract, assemble, write.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::warnings::ScanWarning;
use crate::table::{self, NoteTable};
use crate::tree::{self, Forest};
use crate::vault::{self, NoteRecord, VaultWalker, WalkerError};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("vault walk failed: {0}")]
    Walker(#[from] WalkerError),

    #[error("failed to write CSV artifact {}: {source}", path.display())]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write tree artifact {}: {source}", path.display())]
    WriteTree {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Statistics from a completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Number of markdown files discovered.
    pub files_found: usize,
    /// Number of notes successfully scanned.
    pub notes_scanned: usize,
    /// Number of files skipped because they could not be read.
    pub notes_skipped: usize,
    /// Total warnings recorded.
    pub warning_count: usize,
    /// Scan duration in milliseconds.
    pub duration_ms: u64,
}

/// Crawler over a single vault.
#[derive(Debug)]
pub struct Crawler {
    walker: VaultWalker,
}

impl Crawler {
    /// Create a crawler for the given vault root.
    pub fn new(root: &Path) -> Result<Self, WalkerError> {
        Ok(Self { walker: VaultWalker::new(root)? })
    }

    /// Create a crawler with folder exclusions.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, WalkerError> {
        Ok(Self { walker: VaultWalker::with_exclusions(root, excluded_folders)? })
    }

    /// Skip these vault-relative files (typically the scan's own artifacts,
    /// so repeated scans of the same vault stay byte-identical).
    pub fn exclude_files(&mut self, files: Vec<PathBuf>) {
        self.walker.exclude_files(files);
    }

    /// The canonicalized vault root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Run the scan: walk the vault, extract every note, build the forest.
    ///
    /// Per-note problems (unreadable files, malformed frontmatter, broken
    /// parent links) are logged and recorded as warnings; only walking the
    /// vault itself can fail.
    pub fn crawl(&self) -> Result<VaultScan, ScanError> {
        let started = Instant::now();
        let files = self.walker.walk()?;

        let mut stats = ScanStats { files_found: files.len(), ..ScanStats::default() };
        let mut notes = Vec::with_capacity(files.len());
        let mut warnings = Vec::new();

        for file in &files {
            let content = match fs::read_to_string(&file.absolute_path) {
                Ok(content) => content,
                Err(e) => {
                    let warning = ScanWarning::UnreadableFile {
                        path: file.relative_path.clone(),
                        message: e.to_string(),
                    };
                    warn!("{warning}");
                    warnings.push(warning);
                    stats.notes_skipped += 1;
                    continue;
                }
            };

            let (record, note_warnings) = vault::extract_record(&content, file);
            for warning in &note_warnings {
                warn!("{warning}");
            }
            warnings.extend(note_warnings);

            debug!(name = %record.name, path = %record.relative_path.display(), "scanned note");
            notes.push(record);
            stats.notes_scanned += 1;
        }

        let (forest, tree_warnings) = Forest::build(&notes);
        for warning in &tree_warnings {
            warn!("{warning}");
        }
        warnings.extend(tree_warnings);

        stats.warning_count = warnings.len();
        stats.duration_ms = started.elapsed().as_millis() as u64;
        info!(notes = stats.notes_scanned, warnings = stats.warning_count, "scan complete");

        Ok(VaultScan {
            root: self.walker.root().to_path_buf(),
            notes,
            forest,
            warnings,
            stats,
        })
    }
}

/// The complete result of one vault scan.
#[derive(Debug)]
pub struct VaultScan {
    /// Canonicalized vault root.
    pub root: PathBuf,
    /// Discovery-ordered note records.
    pub notes: Vec<NoteRecord>,
    /// The parent-link hierarchy.
    pub forest: Forest,
    /// Everything that went wrong, in the order it was found.
    pub warnings: Vec<ScanWarning>,
    pub stats: ScanStats,
}

impl VaultScan {
    /// Build the flat table for these notes.
    #[must_use]
    pub fn table(&self) -> NoteTable {
        table::build_table(&self.notes)
    }

    /// Render the reference tree for these notes.
    #[must_use]
    pub fn render_tree(&self) -> String {
        tree::render(&self.forest, &self.notes)
    }

    /// Write both artifacts.
    pub fn write_artifacts(
        &self,
        csv_path: &Path,
        tree_path: &Path,
    ) -> Result<(), ScanError> {
        let table = self.table();
        let file = fs::File::create(csv_path).map_err(|e| ScanError::WriteCsv {
            path: csv_path.to_path_buf(),
            source: e.into(),
        })?;
        table::write_csv(&table, file).map_err(|e| ScanError::WriteCsv {
            path: csv_path.to_path_buf(),
            source: e,
        })?;

        fs::write(tree_path, self.render_tree()).map_err(|e| ScanError::WriteTree {
            path: tree_path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
