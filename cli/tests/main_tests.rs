//! # filecrud CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies the top-level behavior of the `filecrud` command-line interface:
//! standard flags like `--version` and `--help`, and argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_lists_subcommands() {
    let dir = tempdir().unwrap();
    filecrud_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create")
                .and(predicate::str::contains("read"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    filecrud_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    let dir = tempdir().unwrap();
    filecrud_cmd(dir.path()).assert().failure();
}

#[test]
fn test_blank_file_name_fails_validation() {
    let dir = tempdir().unwrap();
    filecrud_cmd(dir.path())
        .args(["create", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}
