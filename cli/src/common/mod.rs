//! # filecrud Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules used by the file handler core and the
//! command handlers. It currently holds only the filesystem helpers in `fs`,
//! keeping low-level file plumbing separate from the merge rules in `core::`
//! and the argument handling in `commands::`.
//!

/// Filesystem operations: file creation/removal and collision-free naming.
pub mod fs;
