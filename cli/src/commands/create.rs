//! # filecrud Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! Implements `filecrud create`, which creates the target file according to a
//! create mode:
//!
//! - `rename` (default): if the file exists, create `name(1).ext`, `name(2).ext`, ... instead
//! - `recreate`: delete an existing file and create it again, empty
//! - `keep`: create the file only if it doesn't exist yet
//!
//! The path of the file that now exists is printed on stdout, which differs from
//! `<FILE>` after a rename.
//!
//! ## Usage
//!
//! ```bash
//! filecrud create notes.txt
//! filecrud create notes.txt --mode keep
//! ```
//!
use super::open_handler;
use anyhow::Context;
use clap::Parser;
use filecrud::core::config;
use filecrud::core::error::Result;
use filecrud::core::handler::CreateMode;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `filecrud create`.
#[derive(Parser, Debug)]
#[command(about = "Create the file")]
pub struct CreateArgs {
    /// The file to create.
    file: PathBuf,

    /// What to do if the file exists: rename, recreate or keep.
    /// Defaults to `create.mode` from the configuration (`rename`).
    #[arg(long, short)]
    mode: Option<String>,
}

/// Handles `filecrud create`.
pub fn handle_create(args: CreateArgs) -> Result<()> {
    info!("Handling create command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load filecrud configuration")?;

    let mode: CreateMode = args.mode.as_deref().unwrap_or(&cfg.create.mode).parse()?;
    let mut handler = open_handler(&args.file, &cfg)?;
    handler.create(mode)?;

    println!("{}", handler.path().display());
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_create_with_mode() {
        let args = CreateArgs::try_parse_from(["create", "notes.txt", "--mode", "keep"]).unwrap();
        assert_eq!(args.file, PathBuf::from("notes.txt"));
        assert_eq!(args.mode.as_deref(), Some("keep"));
    }

    #[test]
    fn test_parses_create_without_mode() {
        let args = CreateArgs::try_parse_from(["create", "notes.txt"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_requires_file() {
        assert!(CreateArgs::try_parse_from(["create"]).is_err());
    }
}
