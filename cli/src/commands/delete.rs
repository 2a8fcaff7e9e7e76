//! # filecrud Delete Command
//!
//! File: cli/src/commands/delete.rs
//!
//! ## Overview
//!
//! Implements `filecrud delete`:
//!
//! - `delete` (default): remove the file if it exists
//! - `clear`: delete and recreate an existing file, leaving it empty
//!
//! Deleting a file that isn't there is not an error.
//!
//! ## Usage
//!
//! ```bash
//! filecrud delete notes.txt
//! filecrud delete notes.txt --mode clear
//! ```
//!
use super::open_handler;
use anyhow::Context;
use clap::Parser;
use filecrud::core::config;
use filecrud::core::error::Result;
use filecrud::core::handler::DeleteMode;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `filecrud delete`.
#[derive(Parser, Debug)]
#[command(about = "Delete the file or clear its contents")]
pub struct DeleteArgs {
    /// The file to delete or clear.
    file: PathBuf,

    /// delete or clear. Defaults to `delete.mode` from the configuration (`delete`).
    #[arg(long, short)]
    mode: Option<String>,
}

/// Handles `filecrud delete`.
pub fn handle_delete(args: DeleteArgs) -> Result<()> {
    info!("Handling delete command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load filecrud configuration")?;

    let mode: DeleteMode = args.mode.as_deref().unwrap_or(&cfg.delete.mode).parse()?;
    let mut handler = open_handler(&args.file, &cfg)?;
    handler.delete(mode)?;
    Ok(())
}
