use std::fs;
use std::path::{Path, PathBuf};

use mdscan_core::scan::{Crawler, ScanWarning, VaultScan};

fn scan(root: &Path) -> VaultScan {
    let mut crawler = Crawler::new(root).unwrap();
    crawler.exclude_files(vec![
        PathBuf::from("vault_notes.csv"),
        PathBuf::from("reference_tree.md"),
    ]);
    crawler.crawl().unwrap()
}

fn write_artifacts(scan: &VaultScan) -> (String, String) {
    let csv_path = scan.root.join("vault_notes.csv");
    let tree_path = scan.root.join("reference_tree.md");
    scan.write_artifacts(&csv_path, &tree_path).unwrap();
    (
        fs::read_to_string(&csv_path).unwrap(),
        fs::read_to_string(&tree_path).unwrap(),
    )
}

#[test]
fn chain_of_parents_builds_a_single_tree() {
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("X.md"), "# X\n").unwrap();
    fs::write(vault.path().join("Y.md"), "---\nparent: X\n---\n# Y\n").unwrap();
    fs::write(vault.path().join("Z.md"), "---\nparent: Y\n---\n# Z\n").unwrap();

    let result = scan(vault.path());
    assert!(result.warnings.is_empty());

    let table = result.table();
    assert_eq!(table.rows.len(), 3);
    assert!(table.header.iter().any(|c| c == "parent"));

    assert_eq!(result.render_tree(), "[[X]]\n- [[Y]]\n\t- [[Z]]\n");
}

#[test]
fn repeated_scans_are_byte_identical() {
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("a.md"), "---\ntags: [x, y]\n---\n# A\n").unwrap();
    fs::write(vault.path().join("b.md"), "---\nparent: a\nstatus: active\n---\n# B\n")
        .unwrap();
    fs::create_dir(vault.path().join("sub")).unwrap();
    fs::write(vault.path().join("sub/c.md"), "---\nparent: \"[[b]]\"\n---\n# C\n")
        .unwrap();

    let first = write_artifacts(&scan(vault.path()));
    let second = write_artifacts(&scan(vault.path()));

    assert_eq!(first, second);
}

#[test]
fn dangling_parent_becomes_root_and_is_reported() {
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("stray.md"), "---\nparent: \"[[W]]\"\n---\n# Stray\n")
        .unwrap();

    let result = scan(vault.path());

    assert_eq!(result.forest.roots(), ["stray"]);
    assert_eq!(
        result.warnings,
        vec![ScanWarning::DanglingParent {
            name: "stray".to_string(),
            parent: "W".to_string(),
        }]
    );

    // The CSV still carries the extracted parent name
    let table = result.table();
    let parent_idx = table.header.iter().position(|c| c == "parent").unwrap();
    assert_eq!(table.rows[0][parent_idx], "W");
}

#[test]
fn parent_cycle_terminates_and_keeps_both_notes() {
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("A.md"), "---\nparent: B\n---\n").unwrap();
    fs::write(vault.path().join("B.md"), "---\nparent: A\n---\n").unwrap();

    let result = scan(vault.path());

    assert!(result.warnings.iter().any(|w| matches!(w, ScanWarning::CycleDetected { .. })));

    let rendered = result.render_tree();
    assert_eq!(rendered.matches("[[A]]").count(), 1);
    assert_eq!(rendered.matches("[[B]]").count(), 1);
    assert_eq!(result.forest.len(), 2);
}

#[test]
fn malformed_frontmatter_still_yields_a_row() {
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("ok.md"), "---\nstatus: fine\n---\n").unwrap();
    fs::write(vault.path().join("broken.md"), "---\ntitle: [unclosed\n---\nBody\n")
        .unwrap();

    let result = scan(vault.path());

    assert_eq!(result.stats.notes_scanned, 2);
    assert_eq!(result.table().rows.len(), 2);
    assert!(
        result
            .warnings
            .iter()
            .any(|w| matches!(w, ScanWarning::MalformedFrontmatter { .. }))
    );
}

#[test]
fn artifacts_do_not_feed_back_into_the_scan() {
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("only.md"), "# Only\n").unwrap();

    let first = scan(vault.path());
    write_artifacts(&first);

    // reference_tree.md now sits in the vault but must not become a note
    let second = scan(vault.path());
    assert_eq!(second.stats.notes_scanned, 1);
    assert_eq!(second.render_tree(), "[[only]]\n");
}
