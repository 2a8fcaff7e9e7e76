//! # filecrud Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the small filesystem primitives the file handler
//! builds its create and delete operations on. They are thin wrappers around
//! `std::fs` that convert every `std::io::Error` into
//! `FileCrudError::FileAccess`, so the failing path travels with the root cause.
//!
//! ## Architecture
//!
//! - **`file_exists`**: `true` only for an existing regular file.
//! - **`create_new_file`**: Creates an empty file, failing if something already exists at the path.
//! - **`remove_file`**: Removes a file.
//! - **`resolve_in_base_dir`**: Joins a relative file argument onto a configured base directory.
//!
//! Reading and writing file *content* lives in `core::reader` and `core::writer`,
//! which own the line-splitting and segment-merging rules.
//!
use crate::core::error::{FileCrudError, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Returns `true` if `path` points at an existing regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Creates a new, empty file at `path`.
///
/// The file must not exist yet; an existing file (or any other entry at that
/// path) is reported as a `FileAccess` error with `ErrorKind::AlreadyExists`.
/// The handle is dropped, and therefore closed, before returning.
///
/// # Errors
///
/// Returns an `Err` if:
/// - Something already exists at `path`.
/// - The parent directory does not exist or is not writable.
pub fn create_new_file(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| FileCrudError::file_access(path, source))?;
    info!("Created file: {:?}", path);
    Ok(())
}

/// Removes the file at `path`.
///
/// # Errors
///
/// Returns an `Err` if the file does not exist or cannot be removed.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| FileCrudError::file_access(path, source))?;
    info!("Removed file: {:?}", path);
    Ok(())
}

/// Resolves a file argument against an optional base directory.
///
/// Absolute paths, and every path when no base directory is configured, are
/// returned unchanged.
pub fn resolve_in_base_dir(file: &Path, base_dir: Option<&Path>) -> PathBuf {
    match base_dir {
        Some(base) if file.is_relative() => {
            let resolved = base.join(file);
            debug!("Resolved {:?} against base directory -> {:?}", file, resolved);
            resolved
        }
        _ => file.to_path_buf(),
    }
}
