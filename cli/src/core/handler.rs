//! # filecrud File Handler
//!
//! File: cli/src/core/handler.rs
//!
//! ## Overview
//!
//! `FileHandler` ties the pieces of the core together for one `FileTarget`:
//! creating the file, reading it into a cached `ReadSnapshot`, merging new
//! content into it, and deleting it.
//!
//! ## Architecture
//!
//! - **Create** (`create_file`, `recreate_file`, `create_if_absent`, or `create(CreateMode)`):
//!   the rename variant consults `common::fs::naming` and retargets the handler.
//! - **Read** (`read`): replaces the cached snapshot with the current file content.
//! - **Update** (`update_with_starting`, `update_with_ending`, `update_file`, or
//!   `update(segment, UpdatePosition)`): hands the new segment and the cached
//!   delimited lines to `core::writer::write_segments`.
//! - **Delete** (`delete_file`, `delete_and_create_file`, or `delete(DeleteMode)`).
//!
//! The selector enums parse from strings through `FromStr`, which is where an
//! unrecognized mode becomes `FileCrudError::InvalidCommand`. Once parsed,
//! dispatch is an exhaustive `match`.
//!
//! ## Lifecycle
//!
//! ```text
//! Unopened -> Created -> (Read <-> Updated) -> Deleted -> Created ...
//! ```
//!
//! An update drops the cached snapshot, so prepend/append after an update needs
//! a fresh `read()` to merge with the current content.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let mut handler = FileHandler::new(FileTarget::new("read.txt")?);
//! handler.read()?;
//! handler.update(&Segment::array(&["update", "update2"]), UpdatePosition::Prepend)?;
//! handler.read()?;
//! assert_eq!(handler.read_lines().unwrap()[0], "update update2");
//! ```
//!
use crate::common::fs::{io, naming};
use crate::core::error::{FileCrudError, Result};
use crate::core::reader::{read_snapshot, ReadSnapshot};
use crate::core::segment::Segment;
use crate::core::target::FileTarget;
use crate::core::writer::{write_segments, Delimited};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Delimiter used until `set_delimiter` is called.
pub const DEFAULT_DELIMITER: &str = " ";

/// How `create` treats an already existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateMode {
    /// Create the file; if the name is taken, create `name(N).ext` instead.
    Rename,
    /// Delete an existing file and create it again, empty.
    Recreate,
    /// Create the file only if it doesn't exist yet.
    KeepExisting,
}

/// What `delete` does with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Remove the file if it exists.
    DeleteFile,
    /// Delete and recreate the file empty, if it exists.
    ClearContents,
}

/// Where `update` places new content relative to the last read content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePosition {
    Prepend,
    Append,
    Overwrite,
}

impl FromStr for CreateMode {
    type Err = FileCrudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rename" => Ok(CreateMode::Rename),
            "recreate" => Ok(CreateMode::Recreate),
            "keep" | "keep-existing" => Ok(CreateMode::KeepExisting),
            _ => Err(FileCrudError::InvalidCommand {
                kind: "create",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for DeleteMode {
    type Err = FileCrudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(DeleteMode::DeleteFile),
            "clear" => Ok(DeleteMode::ClearContents),
            _ => Err(FileCrudError::InvalidCommand {
                kind: "delete",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for UpdatePosition {
    type Err = FileCrudError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prepend" | "start" => Ok(UpdatePosition::Prepend),
            "append" | "end" => Ok(UpdatePosition::Append),
            "overwrite" => Ok(UpdatePosition::Overwrite),
            _ => Err(FileCrudError::InvalidCommand {
                kind: "update",
                value: s.to_string(),
            }),
        }
    }
}

impl UpdatePosition {
    /// Whether this position merges with previously read content.
    pub fn needs_previous_content(self) -> bool {
        !matches!(self, UpdatePosition::Overwrite)
    }
}

/// Where a handler is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    Unopened,
    Created,
    Read,
    Updated,
    Deleted,
}

impl fmt::Display for HandlerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandlerState::Unopened => "unopened",
            HandlerState::Created => "created",
            HandlerState::Read => "read",
            HandlerState::Updated => "updated",
            HandlerState::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// Create, read, update and delete operations over a single file.
#[derive(Debug)]
pub struct FileHandler {
    target: FileTarget,
    delimiter: String,
    snapshot: Option<ReadSnapshot>,
    state: HandlerState,
}

impl FileHandler {
    pub fn new(target: FileTarget) -> Self {
        Self {
            target,
            delimiter: DEFAULT_DELIMITER.to_string(),
            snapshot: None,
            state: HandlerState::Unopened,
        }
    }

    /// Builder-style variant of `set_delimiter`.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn path(&self) -> &Path {
        self.target.path()
    }

    pub fn target(&self) -> &FileTarget {
        &self.target
    }

    /// Renames the target (validated). Later operations act on the renamed file in
    /// the same directory; the cached read, if any, is kept.
    pub fn set_file_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.target.set_name(name)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Replaces the delimiter. `None` keeps the current one.
    pub fn set_delimiter(&mut self, delimiter: Option<&str>) {
        if let Some(delimiter) = delimiter {
            self.delimiter = delimiter.to_string();
        }
    }

    pub fn state(&self) -> HandlerState {
        self.state
    }

    /// Lines from the last successful read, without terminators.
    pub fn read_lines(&self) -> Option<&[String]> {
        self.snapshot.as_ref().map(ReadSnapshot::lines)
    }

    /// Lines from the last successful read, terminated except for the last.
    pub fn delimited_lines(&self) -> Option<&[String]> {
        self.snapshot.as_ref().map(ReadSnapshot::delimited)
    }

    fn transition(&mut self, next: HandlerState) {
        debug!("{}: {} -> {}", self.target.name(), self.state, next);
        self.state = next;
    }

    // --- Create ---

    /// Creates the file. If the name is taken, a numbered name is chosen and the
    /// handler is retargeted to it.
    pub fn create_file(&mut self) -> Result<()> {
        // Any entry counts as taken, not just regular files.
        if self.path().exists() {
            let free = naming::resolve_available_path(self.path(), Path::exists);
            info!(
                "{:?} already exists, creating {:?} instead",
                self.path(),
                free
            );
            self.target.set_path(free)?;
        }
        io::create_new_file(self.path())?;
        self.transition(HandlerState::Created);
        Ok(())
    }

    /// Creates the file, deleting an existing one first.
    pub fn recreate_file(&mut self) -> Result<()> {
        if io::file_exists(self.path()) {
            io::remove_file(self.path())?;
        }
        io::create_new_file(self.path())?;
        self.transition(HandlerState::Created);
        Ok(())
    }

    /// Creates the file only if it doesn't exist; an existing file is left untouched.
    pub fn create_if_absent(&mut self) -> Result<()> {
        if io::file_exists(self.path()) {
            debug!("{:?} already exists, leaving it untouched", self.path());
        } else {
            io::create_new_file(self.path())?;
        }
        self.transition(HandlerState::Created);
        Ok(())
    }

    pub fn create(&mut self, mode: CreateMode) -> Result<()> {
        match mode {
            CreateMode::Rename => self.create_file(),
            CreateMode::Recreate => self.recreate_file(),
            CreateMode::KeepExisting => self.create_if_absent(),
        }
    }

    // --- Read ---

    /// Reads the whole file and replaces the cached snapshot.
    ///
    /// On failure the cache is left empty.
    pub fn read(&mut self) -> Result<()> {
        self.snapshot = None;
        let snapshot = read_snapshot(self.path())?;
        self.snapshot = Some(snapshot);
        self.transition(HandlerState::Read);
        Ok(())
    }

    // --- Update ---

    /// Writes `update` before the previously read content.
    pub fn update_with_starting(&mut self, update: &Segment) -> Result<()> {
        let previous = self.previous_segment("prepend");
        let new = Delimited::new(update, &self.delimiter);
        write_segments(
            self.target.path(),
            Some(new),
            previous.as_ref().map(|seg| Delimited::new(seg, "")),
        )?;
        self.finish_update();
        Ok(())
    }

    /// Writes `update` after the previously read content.
    pub fn update_with_ending(&mut self, update: &Segment) -> Result<()> {
        let previous = self.previous_segment("append");
        let new = Delimited::new(update, &self.delimiter);
        write_segments(
            self.target.path(),
            previous.as_ref().map(|seg| Delimited::new(seg, "")),
            Some(new),
        )?;
        self.finish_update();
        Ok(())
    }

    /// Replaces the file content with `update`.
    pub fn update_file(&mut self, update: &Segment) -> Result<()> {
        write_segments(
            self.target.path(),
            Some(Delimited::new(update, &self.delimiter)),
            None,
        )?;
        self.finish_update();
        Ok(())
    }

    pub fn update(&mut self, update: &Segment, position: UpdatePosition) -> Result<()> {
        match position {
            UpdatePosition::Prepend => self.update_with_starting(update),
            UpdatePosition::Append => self.update_with_ending(update),
            UpdatePosition::Overwrite => self.update_file(update),
        }
    }

    /// The cached delimited lines as a segment. An empty file contributes nothing,
    /// so no stray terminator is written next to the new content.
    fn previous_segment(&self, action: &str) -> Option<Segment> {
        match &self.snapshot {
            Some(snapshot) if !snapshot.is_empty() => Some(snapshot.to_segment()),
            Some(_) => None,
            None => {
                warn!(
                    "{}: no content has been read, {} writes only the new content",
                    self.target.name(),
                    action
                );
                None
            }
        }
    }

    fn finish_update(&mut self) {
        self.snapshot = None;
        self.transition(HandlerState::Updated);
    }

    // --- Delete ---

    /// Removes the file if it exists.
    pub fn delete_file(&mut self) -> Result<()> {
        if io::file_exists(self.path()) {
            io::remove_file(self.path())?;
        }
        self.snapshot = None;
        self.transition(HandlerState::Deleted);
        Ok(())
    }

    /// Empties an existing file by deleting and recreating it. A missing file stays missing.
    pub fn delete_and_create_file(&mut self) -> Result<()> {
        if io::file_exists(self.path()) {
            io::remove_file(self.path())?;
            io::create_new_file(self.path())?;
            self.snapshot = None;
            self.transition(HandlerState::Created);
        } else {
            debug!("{:?} doesn't exist, nothing to clear", self.path());
        }
        Ok(())
    }

    pub fn delete(&mut self, mode: DeleteMode) -> Result<()> {
        match mode {
            DeleteMode::DeleteFile => self.delete_file(),
            DeleteMode::ClearContents => self.delete_and_create_file(),
        }
    }
}
