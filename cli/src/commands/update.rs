//! # filecrud Update Command
//!
//! File: cli/src/commands/update.rs
//!
//! ## Overview
//!
//! Implements `filecrud update`, which merges new content into the file.
//!
//! ## Architecture
//!
//! 1. Resolve position and delimiter: flags first, then configuration.
//! 2. Build the segment: plain items form an array; with `--map` every item must
//!    be `KEY=VALUE` and the items form a mapping (one entry per line).
//! 3. For `prepend` and `append`, read the file so its current content can be
//!    merged. A missing file is an error for these positions.
//! 4. Write through `FileHandler::update`.
//!
//! ## Usage
//!
//! ```bash
//! filecrud update notes.txt --position prepend update update2
//! filecrud update notes.txt --position append --delimiter ", " a b c
//! filecrud update settings.txt --map --delimiter "=" host=localhost port=8080
//! ```
//!
use super::open_handler;
use anyhow::Context;
use clap::Parser;
use filecrud::core::config;
use filecrud::core::error::{FileCrudError, Result};
use filecrud::core::handler::UpdatePosition;
use filecrud::core::segment::Segment;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for `filecrud update`.
#[derive(Parser, Debug)]
#[command(about = "Prepend, append or overwrite content")]
pub struct UpdateArgs {
    /// The file to update.
    file: PathBuf,

    /// Where the new content goes: prepend, append or overwrite.
    /// Defaults to `update.position` from the configuration (`overwrite`).
    #[arg(long, short)]
    position: Option<String>,

    /// Delimiter between the new elements (default from configuration, a single space).
    #[arg(long, short, allow_hyphen_values = true)]
    delimiter: Option<String>,

    /// Treat each item as a KEY=VALUE map entry.
    #[arg(long)]
    map: bool,

    /// The elements to write.
    #[arg(required = true, num_args = 1..)]
    items: Vec<String>,
}

/// Handles `filecrud update`.
pub fn handle_update(args: UpdateArgs) -> Result<()> {
    info!("Handling update command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load filecrud configuration")?;

    let position: UpdatePosition = args
        .position
        .as_deref()
        .unwrap_or(&cfg.update.position)
        .parse()?;
    let segment = build_segment(&args.items, args.map)?;

    let mut handler = open_handler(&args.file, &cfg)?;
    handler.set_delimiter(args.delimiter.as_deref());

    if position.needs_previous_content() {
        handler
            .read()
            .with_context(|| format!("Failed to read {:?} before updating", handler.path()))?;
    }
    debug!(
        "Writing {} element(s) with delimiter {:?} ({:?})",
        segment.len(),
        handler.delimiter(),
        position
    );
    handler.update(&segment, position)?;

    println!("Updated {}", handler.path().display());
    Ok(())
}

/// Turns the raw items into an array segment, or a mapping when `as_map` is set.
fn build_segment(items: &[String], as_map: bool) -> Result<Segment> {
    if !as_map {
        return Ok(Segment::array(items));
    }
    let entries = items
        .iter()
        .map(|item| parse_map_item(item))
        .collect::<Result<Vec<_>>>()?;
    Ok(Segment::mapping(entries))
}

/// Splits `KEY=VALUE` on the first `=`.
fn parse_map_item(item: &str) -> Result<(String, String)> {
    match item.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(FileCrudError::ArgumentParsing(format!(
            "Map entry '{}' is not in KEY=VALUE form",
            item
        ))
        .into()),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_update() {
        let args = UpdateArgs::try_parse_from([
            "update",
            "notes.txt",
            "--position",
            "prepend",
            "--delimiter",
            ", ",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(args.position.as_deref(), Some("prepend"));
        assert_eq!(args.delimiter.as_deref(), Some(", "));
        assert_eq!(args.items, vec!["a", "b"]);
        assert!(!args.map);
    }

    #[test]
    fn test_update_requires_items() {
        assert!(UpdateArgs::try_parse_from(["update", "notes.txt"]).is_err());
    }

    #[test]
    fn test_build_array_segment() -> Result<()> {
        let items = vec!["update".to_string(), "update2".to_string()];
        let segment = build_segment(&items, false)?;
        assert_eq!(segment, Segment::array(&["update", "update2"]));
        Ok(())
    }

    #[test]
    fn test_build_map_segment_splits_on_first_equals() -> Result<()> {
        let items = vec!["3=update3".to_string(), "url=a=b".to_string()];
        let segment = build_segment(&items, true)?;
        assert_eq!(segment.render(""), "3update3\nurla=b");
        Ok(())
    }

    #[test]
    fn test_map_item_without_equals_is_rejected() {
        let err = parse_map_item("novalue").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FileCrudError>(),
            Some(FileCrudError::ArgumentParsing(_))
        ));
    }
}
