//! # filecrud Line Reader
//!
//! File: cli/src/core/reader.rs
//!
//! ## Overview
//!
//! Loads a text file into a `ReadSnapshot`: two aligned views of the same lines.
//!
//! - **lines**: every line verbatim, without its terminator.
//! - **delimited**: the same lines with `\n` appended to every line except the
//!   last, which mirrors the bytes the writer produces (no terminator after the
//!   final line).
//!
//! The delimited view is what the update operations feed back into the writer
//! as the "existing content" segment, with an empty delimiter, so the previous
//! line structure is reproduced exactly.
//!
//! An empty file yields two empty views. A file that cannot be opened or read
//! yields `FileCrudError::FileAccess`.
//!
use crate::core::error::{FileCrudError, Result};
use crate::core::segment::{Segment, LINE_TERMINATOR};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// The two aligned line views produced by one read of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadSnapshot {
    lines: Vec<String>,
    delimited: Vec<String>,
}

impl ReadSnapshot {
    /// Builds both views from plain lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let last = lines.len().saturating_sub(1);
        let delimited = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                if index < last {
                    format!("{}{}", line, LINE_TERMINATOR)
                } else {
                    line.clone()
                }
            })
            .collect();
        Self { lines, delimited }
    }

    /// Lines without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines with a trailing terminator on all but the last.
    pub fn delimited(&self) -> &[String] {
        &self.delimited
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The delimited view as a segment, ready to be merged by the writer.
    pub fn to_segment(&self) -> Segment {
        Segment::Sequence(self.delimited.clone())
    }
}

/// Reads the whole file at `path` into a `ReadSnapshot`.
///
/// Both `\n` and `\r\n` terminators are stripped from the plain view.
///
/// # Errors
///
/// Returns `FileCrudError::FileAccess` if the file is missing, cannot be opened,
/// or a read fails part-way (including invalid UTF-8).
pub fn read_snapshot(path: &Path) -> Result<ReadSnapshot> {
    let file = File::open(path).map_err(|source| FileCrudError::file_access(path, source))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| FileCrudError::file_access(path, source))?;
    debug!("Read {} line(s) from {:?}", lines.len(), path);
    Ok(ReadSnapshot::from_lines(lines))
}
