use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn book(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_DIR", dir)
        .env("CONTACTS_STORAGE", "json")
        .env_remove("CONTACTS_SEED_URL")
        .arg("--no-seed");
    cmd
}

#[test]
fn add_contact() {
    let dir = tempdir().unwrap();

    book(dir.path())
        .args([
            "add",
            "--name",
            "Alice",
            "--email",
            "alice@example.com",
            "--phone",
            "08031234567",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully (id 1)"));

    // Confirm newly added contact exist
    book(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("alice@example.com")));

    // Snapshot is written next to the configured directory
    assert!(dir.path().join("contacts.json").exists());
}

#[test]
fn add_allows_empty_email_and_phone() {
    let dir = tempdir().unwrap();

    book(dir.path())
        .args(["add", "--name", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));

    let snapshot = std::fs::read_to_string(dir.path().join("contacts.json")).unwrap();
    assert_eq!(
        snapshot,
        r#"[{"id":1,"name":"Bob","email":"","phone":""}]"#
    );
}

#[test]
fn add_requires_a_name() {
    let dir = tempdir().unwrap();

    book(dir.path())
        .args(["add", "--email", "x@y.z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn memory_storage_does_not_touch_disk() {
    let dir = tempdir().unwrap();

    book(dir.path())
        .env("CONTACTS_STORAGE", "memory")
        .args(["add", "--name", "Ghost"])
        .assert()
        .success();

    assert!(!dir.path().join("contacts.json").exists());
}

#[test]
fn unknown_storage_medium_fails() {
    let dir = tempdir().unwrap();

    book(dir.path())
        .args(["--storage", "txt", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognized storage medium"));
}
