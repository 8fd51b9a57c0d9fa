//! Scan command implementation.

use std::path::{Path, PathBuf};

use crate::ScanArgs;
use crate::logging;

/// Run the scan command.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: ScanArgs) {
    let rc = super::load_config(config, profile);
    logging::init(&rc);

    let vault = super::resolve_vault(args.vault, &rc);
    println!("Crawling vault: {}", vault.display());

    let mut crawler = super::build_crawler(&vault, &rc);

    let csv_path = args
        .csv
        .unwrap_or_else(|| crawler.root().join(&rc.output.csv_file));
    let tree_path = args
        .tree
        .unwrap_or_else(|| crawler.root().join(&rc.output.tree_file));

    // Override paths inside the vault must not feed back into the scan either
    let overrides: Vec<PathBuf> = [&csv_path, &tree_path]
        .iter()
        .filter_map(|p| p.strip_prefix(crawler.root()).ok().map(Path::to_path_buf))
        .collect();
    crawler.exclude_files(overrides);

    let scan = super::crawl_or_exit(&crawler);
    println!("Found {} notes", scan.stats.notes_scanned);

    if let Err(e) = scan.write_artifacts(&csv_path, &tree_path) {
        eprintln!("Error writing artifacts: {}", e);
        std::process::exit(1);
    }

    println!("CSV generated: {} ({} notes)", csv_path.display(), scan.notes.len());
    println!("Reference tree generated: {}", tree_path.display());
    if !scan.warnings.is_empty() {
        println!("{} warnings (details on stderr)", scan.warnings.len());
    }
}
