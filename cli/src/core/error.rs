//! # filecrud Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the filecrud application.
//! Every fallible operation in the file handler core and in the command handlers
//! returns the crate-wide `Result<T>` alias, so failures surface to the caller
//! immediately with the root cause attached. Nothing is retried internally.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FileCrudError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds are:
//! - Validation errors (empty or blank file names)
//! - File access errors (open, read, write, create or delete failures)
//! - Invalid command errors (unknown create/delete/update selectors)
//! - Configuration errors
//! - Argument parsing errors
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if name.trim().is_empty() {
//!     return Err(FileCrudError::Validation("File name takes an empty or blank value".into()).into());
//! }
//!
//! // Branch on the error kind
//! match handler.read() {
//!     Ok(()) => {}
//!     Err(e) if matches!(e.downcast_ref::<FileCrudError>(), Some(FileCrudError::FileAccess { .. })) => {
//!         println!("File is missing, creating it first...");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the filecrud application.
// No PartialEq derive because `std::io::Error` doesn't implement it.
#[derive(Error, Debug)]
pub enum FileCrudError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File access failed for '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {kind} command: '{value}'")]
    InvalidCommand { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

impl FileCrudError {
    /// Wraps an I/O failure together with the path it happened on.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileCrudError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display() {
        let validation = FileCrudError::Validation("File name is blank".to_string());
        assert_eq!(validation.to_string(), "Validation error: File name is blank");

        let invalid = FileCrudError::InvalidCommand {
            kind: "update",
            value: "sideways".into(),
        };
        assert_eq!(invalid.to_string(), "Invalid update command: 'sideways'");

        let access = FileCrudError::file_access(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            access.to_string(),
            "File access failed for 'missing.txt': no such file"
        );
    }

    #[test]
    fn test_file_access_keeps_root_cause() {
        let err = FileCrudError::file_access(
            "locked.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("FileAccess should expose its source");
        let io_err = source
            .downcast_ref::<io::Error>()
            .expect("source should be an io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = FileCrudError::Config("bad mode".into()).into();
        assert!(matches!(
            err.downcast_ref::<FileCrudError>(),
            Some(FileCrudError::Config(_))
        ));
    }
}
