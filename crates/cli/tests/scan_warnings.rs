use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn mds() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mds"));
    cmd.env("XDG_CONFIG_HOME", tempdir().unwrap().keep());
    cmd
}

#[test]
fn dangling_parent_warns_but_succeeds() {
    let vault = tempdir().unwrap();
    fs::write(vault.path().join("stray.md"), "---\nparent: \"[[W]]\"\n---\n# Stray\n")
        .unwrap();

    mds()
        .args(["scan", vault.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warnings"))
        .stderr(predicate::str::contains("missing parent 'W'"));

    // The note is still present, as a root
    let tree = fs::read_to_string(vault.path().join("reference_tree.md")).unwrap();
    assert_eq!(tree, "[[stray]]\n");
}

#[test]
fn parent_cycle_warns_and_terminates() {
    let vault = tempdir().unwrap();
    fs::write(vault.path().join("A.md"), "---\nparent: B\n---\n").unwrap();
    fs::write(vault.path().join("B.md"), "---\nparent: A\n---\n").unwrap();

    mds()
        .args(["scan", vault.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("circular"));

    let tree = fs::read_to_string(vault.path().join("reference_tree.md")).unwrap();
    assert_eq!(tree, "[[A]]\n- [[B]]\n");
}

#[test]
fn malformed_frontmatter_warns_and_keeps_the_note() {
    let vault = tempdir().unwrap();
    fs::write(vault.path().join("broken.md"), "---\ntitle: [unclosed\n---\nBody\n")
        .unwrap();

    mds()
        .args(["scan", vault.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 notes"))
        .stderr(predicate::str::contains("malformed frontmatter"));

    let csv = fs::read_to_string(vault.path().join("vault_notes.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("broken"));
}
