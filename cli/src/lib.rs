//! # filecrud Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Create, read, update and delete operations over a single text file, with
//! new content merged into the existing content by prepend, append or overwrite.
//! The `filecrud` binary (`main.rs`) is a thin command-line front end over this
//! library; integration tests use both.
//!
//! - `core`: the file handler, segments, reader/writer, configuration and errors.
//! - `common`: filesystem helpers (file creation/removal, collision-free naming).
//!
pub mod common;
pub mod core;

pub use crate::core::error::{FileCrudError, Result};
pub use crate::core::handler::{CreateMode, DeleteMode, FileHandler, HandlerState, UpdatePosition};
pub use crate::core::segment::Segment;
pub use crate::core::target::FileTarget;
