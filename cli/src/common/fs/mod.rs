//! # filecrud Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers the file handler core is built on.
//! Functionality is delegated to the following submodules:
//!
//! - **`io`**: Creating, removing and probing files, with errors converted into `FileCrudError::FileAccess`.
//! - **`naming`**: Computing a collision-free `name(N).ext` when the requested file already exists.
//!
//! Callers import from the specific submodule, e.g.
//! `use crate::common::fs::naming::resolve_available_path;`.
//!

/// Basic file operations (`create_new_file`, `remove_file`, `file_exists`, ...).
pub mod io;
/// Collision-free file naming (`resolve_available_path`).
pub mod naming;
