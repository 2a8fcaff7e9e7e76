//! # filecrud Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the filecrud CLI and the small
//! helper they share for turning a `<FILE>` argument into a `FileHandler`.
//!
//! ## Command Groups
//!
//! - `create`: Create the file (rename on collision, recreate, or keep existing)
//! - `read`: Print the file's lines, plain or with their terminators
//! - `update`: Prepend, append or overwrite content
//! - `delete`: Delete the file or clear its contents
//!
//! Each module defines its own `clap` arguments struct and a `handle_*` function.
//! Mode selectors are taken as plain strings and parsed by the core's `FromStr`
//! impls, so unknown values surface as `FileCrudError::InvalidCommand`.
//!
use filecrud::common::fs::io::resolve_in_base_dir;
use filecrud::core::config::Config;
use filecrud::core::error::Result;
use filecrud::core::handler::FileHandler;
use filecrud::core::target::FileTarget;
use std::path::Path;
use tracing::debug;

/// `filecrud create`: create the target file.
pub mod create;
/// `filecrud delete`: delete the file or clear its contents.
pub mod delete;
/// `filecrud read`: print the file's lines.
pub mod read;
/// `filecrud update`: merge new content into the file.
pub mod update;

/// Builds a handler for `file`, resolved against the configured base directory.
///
/// Fails with `FileCrudError::Validation` if the file name is empty or blank.
pub(crate) fn open_handler(file: &Path, cfg: &Config) -> Result<FileHandler> {
    let path = resolve_in_base_dir(file, cfg.base_dir());
    let target = FileTarget::from_path(path)?;
    debug!("Operating on {:?}", target.path());
    Ok(FileHandler::new(target).with_delimiter(cfg.update.delimiter.as_str()))
}
