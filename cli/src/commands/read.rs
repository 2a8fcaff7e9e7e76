//! # filecrud Read Command
//!
//! File: cli/src/commands/read.rs
//!
//! ## Overview
//!
//! Implements `filecrud read`, which loads the file and prints it line by line.
//! With `--delimited` the delimited view is printed instead, exactly as it would
//! be merged back into the file by an update.
//!
//! ## Usage
//!
//! ```bash
//! filecrud read notes.txt
//! filecrud read notes.txt --delimited
//! ```
//!
use super::open_handler;
use anyhow::Context;
use clap::Parser;
use filecrud::core::config;
use filecrud::core::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `filecrud read`.
#[derive(Parser, Debug)]
#[command(about = "Print the file's lines")]
pub struct ReadArgs {
    /// The file to read.
    file: PathBuf,

    /// Print the delimited view (terminators kept on all but the last line).
    #[arg(long)]
    delimited: bool,
}

/// Handles `filecrud read`.
pub fn handle_read(args: ReadArgs) -> Result<()> {
    info!("Handling read command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load filecrud configuration")?;

    let mut handler = open_handler(&args.file, &cfg)?;
    handler.read()?;

    if args.delimited {
        let delimited = handler.delimited_lines().unwrap_or_default();
        println!("{}", delimited.concat());
    } else {
        for line in handler.read_lines().unwrap_or_default() {
            println!("{}", line);
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_read() {
        let args = ReadArgs::try_parse_from(["read", "notes.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("notes.txt"));
        assert!(!args.delimited);

        let args = ReadArgs::try_parse_from(["read", "notes.txt", "--delimited"]).unwrap();
        assert!(args.delimited);
    }
}
