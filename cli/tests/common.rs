//! # filecrud CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a
//! separate test crate.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An `assert_cmd::Command` for the compiled `filecrud` binary.
///
/// The command runs inside `dir`, so the project config search starts there
/// and relative file arguments resolve against it. `HOME` and `XDG_CONFIG_HOME`
/// also point into `dir`, so the developer's own user config is never loaded.
///
/// ## Panics
/// Panics if the `filecrud` binary cannot be found via `Command::cargo_bin`.
pub fn filecrud_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("filecrud").expect("Failed to find filecrud binary for testing");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// The two-line file used throughout the update tests.
pub const READ_FIXTURE: &str = "test,\ntest2, test3,";
