//! # filecrud File Target
//!
//! File: cli/src/core/target.rs
//!
//! ## Overview
//!
//! `FileTarget` identifies the single file a `FileHandler` operates on: a
//! validated display name plus the path used for actual I/O. The name can never
//! be empty or whitespace-only; both constructors and `set_name` reject such
//! values with `FileCrudError::Validation`.
//!
//! Name and path always describe the same file. `set_name` retargets the path
//! within its parent directory, and `set_path` (used when the handler renames its
//! file to avoid a collision) makes the name follow the new final path component.
//!
use crate::core::error::{FileCrudError, Result};
use std::path::{Path, PathBuf};

/// The file a handler operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    name: String,
    path: PathBuf,
}

impl FileTarget {
    /// Creates a target from a file name; the path is the name itself.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        let path = PathBuf::from(&name);
        Ok(Self { name, path })
    }

    /// Creates a target from an existing path; the name is its final component.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        validate_name(&name)?;
        Ok(Self { name, path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the target; the path keeps its parent directory and takes the new name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.path.set_file_name(&name);
        self.name = name;
        Ok(())
    }

    /// Points the target at a different path; the name becomes its final component.
    pub fn set_path(&mut self, path: PathBuf) -> Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        validate_name(&name)?;
        self.name = name;
        self.path = path;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FileCrudError::Validation(
            "File name takes an empty or blank value".to_string(),
        )
        .into());
    }
    Ok(())
}
