//! # filecrud Segment Writer
//!
//! File: cli/src/core/writer.rs
//!
//! ## Overview
//!
//! Writes up to two segments into a file, replacing whatever it held before.
//! This is the single write path behind every update operation; the prepend,
//! append and overwrite policies only differ in which segments they pass and in
//! which order.
//!
//! ## Merge Rules
//!
//! | `first`  | `last`   | file content                               |
//! |----------|----------|--------------------------------------------|
//! | absent   | absent   | empty                                      |
//! | present  | absent   | `first`                                    |
//! | absent   | present  | `last`                                     |
//! | present  | present  | `first` + `\n` + `last`                    |
//!
//! Each segment is serialized with its own delimiter (see `Segment::write_to`).
//! The file is always opened with truncation. There is no partial-write recovery:
//! if a write fails the file may be left truncated or partially written, and the
//! error is returned as `FileCrudError::FileAccess`.
//!
use crate::core::error::{FileCrudError, Result};
use crate::core::segment::{Segment, LINE_TERMINATOR};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// A segment paired with the delimiter used between its elements.
#[derive(Debug, Clone, Copy)]
pub struct Delimited<'a> {
    pub segment: &'a Segment,
    pub delimiter: &'a str,
}

impl<'a> Delimited<'a> {
    pub fn new(segment: &'a Segment, delimiter: &'a str) -> Self {
        Self { segment, delimiter }
    }
}

/// Writes `first` and `last` into `path`, truncating the file first.
///
/// # Errors
///
/// Returns `FileCrudError::FileAccess` if the file cannot be opened for writing,
/// or if writing or flushing fails.
pub fn write_segments(
    path: &Path,
    first: Option<Delimited<'_>>,
    last: Option<Delimited<'_>>,
) -> Result<()> {
    let file = File::create(path).map_err(|source| FileCrudError::file_access(path, source))?;
    let mut writer = BufWriter::new(file);

    merge_into(&mut writer, first, last)
        .and_then(|()| writer.flush())
        .map_err(|source| FileCrudError::file_access(path, source))?;

    debug!(
        "Wrote {} + {} to {:?}",
        describe(first),
        describe(last),
        path
    );
    Ok(())
}

/// Serializes the merge of `first` and `last` into any writer.
fn merge_into<W: Write>(
    writer: &mut W,
    first: Option<Delimited<'_>>,
    last: Option<Delimited<'_>>,
) -> std::io::Result<()> {
    match (first, last) {
        (None, None) => Ok(()),
        (Some(only), None) | (None, Some(only)) => only.segment.write_to(writer, only.delimiter),
        (Some(first), Some(last)) => {
            first.segment.write_to(writer, first.delimiter)?;
            writer.write_all(LINE_TERMINATOR.as_bytes())?;
            last.segment.write_to(writer, last.delimiter)
        }
    }
}

fn describe(part: Option<Delimited<'_>>) -> String {
    match part {
        Some(d) => format!("{}[{}]", d.segment.kind(), d.segment.len()),
        None => "nothing".to_string(),
    }
}
