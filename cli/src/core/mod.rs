//! # filecrud Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the file handler core and the infrastructure around it.
//!
//! ## Architecture
//!
//! - `target`: The validated file name/path a handler operates on
//! - `segment`: Arrays, sequences and mappings, and how each is serialized
//! - `reader`: Loads a file into aligned plain and delimited line views
//! - `writer`: Writes one or two segments into a file, truncating it first
//! - `handler`: `FileHandler`, the create/read/update/delete entry point and its mode selectors
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! Dependency order, leaves first: `naming` (in `common::fs`) → `reader` → `writer` → `handler`.
//!
//! ## Usage
//!
//! ```rust
//! use filecrud::core::handler::{FileHandler, UpdatePosition};
//! use filecrud::core::segment::Segment;
//! use filecrud::core::target::FileTarget;
//! ```
//!
pub mod config;
pub mod error;
pub mod handler;
pub mod reader;
pub mod segment;
pub mod target;
pub mod writer;
