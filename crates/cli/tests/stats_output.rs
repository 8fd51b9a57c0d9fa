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

fn fixture_vault() -> tempfile::TempDir {
    let vault = tempdir().unwrap();
    fs::write(vault.path().join("root.md"), "# Root\n").unwrap();
    fs::write(vault.path().join("child.md"), "---\nparent: root\n---\n").unwrap();
    fs::write(vault.path().join("grandchild.md"), "---\nparent: child\n---\n").unwrap();
    fs::write(vault.path().join("loose.md"), "# Loose\n").unwrap();
    vault
}

#[test]
fn stats_prints_summary_table() {
    let vault = fixture_vault();

    mds()
        .args(["stats", vault.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes"))
        .stdout(predicate::str::contains("Max depth"))
        .stdout(predicate::str::contains("Orphans (no parent, no children):"))
        .stdout(predicate::str::contains("loose"));
}

#[test]
fn stats_json_is_machine_readable() {
    let vault = fixture_vault();

    let output = mds()
        .args(["stats", vault.path().to_str().unwrap(), "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let data: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(data["total_notes"], 4);
    assert_eq!(data["root_count"], 2);
    assert_eq!(data["orphan_count"], 1);
    assert_eq!(data["max_depth"], 2);
    assert_eq!(data["orphans"][0], "loose");
}
