//! Smoke tests for command wiring and input validation
//!
//! None of these reach a database: help output, and inputs rejected before
//! a connection is opened.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn lightbnb() -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.env_remove("DATABASE_URL").env_remove("RUST_LOG");
    cmd
}

// === Help Output ===

#[test]
fn test_top_level_help_lists_commands() {
    lightbnb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reservations"))
        .stdout(predicate::str::contains("properties"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_user_get_help() {
    lightbnb()
        .args(["user", "get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email address of the user"));
}

#[test]
fn test_reservations_help() {
    lightbnb()
        .args(["reservations", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest user id"));
}

#[test]
fn test_properties_search_help() {
    lightbnb()
        .args(["properties", "search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum average review rating"));
}

// === Validation Before Connect ===

#[test]
fn test_user_get_requires_email_or_id() {
    lightbnb()
        .args(["user", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_user_add_rejects_blank_name() {
    lightbnb()
        .args(["user", "add", "--name", " ", "--email", "a@b.co", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));
}

#[test]
fn test_search_rejects_inverted_price_range() {
    lightbnb()
        .args(["properties", "search", "--min-price", "200", "--max-price", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search filters"));
}

#[test]
fn test_search_rejects_out_of_range_rating() {
    lightbnb()
        .args(["properties", "search", "--min-rating", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum_rating"));
}

#[test]
fn test_properties_add_rejects_invalid_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"owner_id": 1, "title": "No address"}}"#).unwrap();

    lightbnb()
        .args(["properties", "add", "--json"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid property document"));
}

#[test]
fn test_properties_add_reads_stdin() {
    lightbnb()
        .args(["properties", "add", "--json", "-"])
        .write_stdin(r#"{"owner_id": 1, "title": " "}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid property document"));
}
