//! Command implementations.

pub mod doctor;
pub mod scan;
pub mod stats;
pub mod tree;

use std::path::{Path, PathBuf};

use mdscan_core::config::loader::ConfigLoader;
use mdscan_core::config::types::ResolvedConfig;
use mdscan_core::scan::{Crawler, VaultScan};

/// Load configuration; fatal on config errors.
pub(crate) fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Pick the vault root: CLI argument, then profile, then current directory.
pub(crate) fn resolve_vault(arg: Option<PathBuf>, rc: &ResolvedConfig) -> PathBuf {
    arg.or_else(|| rc.vault_root.clone()).unwrap_or_else(|| PathBuf::from("."))
}

/// Build a crawler for the vault with the configured exclusions, keeping the
/// scan's own artifacts out of discovery. Fatal on a missing root.
pub(crate) fn build_crawler(root: &Path, rc: &ResolvedConfig) -> Crawler {
    let mut crawler = match Crawler::with_exclusions(root, rc.excluded_folders.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    crawler.exclude_files(vec![
        PathBuf::from(&rc.output.csv_file),
        PathBuf::from(&rc.output.tree_file),
    ]);
    crawler
}

/// Crawl the vault; fatal on walk failure.
pub(crate) fn crawl_or_exit(crawler: &Crawler) -> VaultScan {
    match crawler.crawl() {
        Ok(scan) => scan,
        Err(e) => {
            eprintln!("Error scanning vault: {}", e);
            std::process::exit(1);
        }
    }
}
