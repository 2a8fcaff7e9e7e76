//! # filecrud Collision-Free File Naming
//!
//! File: cli/src/common/fs/naming.rs
//!
//! ## Overview
//!
//! Computes a replacement file name when the requested one is already taken.
//! Used only by the create-or-rename path of the file handler
//! (`FileHandler::create_file`).
//!
//! ## Naming Scheme
//!
//! The name is split on its **last** `.` into a base and an extension, and a
//! counter in parentheses is inserted before the extension:
//!
//! ```text
//! notes.txt      -> notes(1).txt, notes(2).txt, ...
//! archive.tar.gz -> archive.tar(1).gz, archive.tar(2).gz, ...
//! README         -> README(1), README(2), ...
//! ```
//!
//! Names without any dot are treated as a base with an empty extension, so no
//! trailing dot is added. The counter starts at 1 and the first candidate for
//! which the existence check returns `false` wins. Candidates always live in the
//! same directory as the original path.
//!
use std::path::{Path, PathBuf};
use tracing::debug;

/// Splits a file name on its last `.` into `(base, extension)`.
///
/// Embedded dots stay in the base. Returns `None` for the extension when the name
/// has no dot at all.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((base, ext)) => (base, Some(ext)),
        None => (name, None),
    }
}

/// Builds the `counter`-th candidate for `name`, e.g. `("a.txt", 2)` -> `"a(2).txt"`.
pub fn numbered_name(name: &str, counter: u32) -> String {
    match split_file_name(name) {
        (base, Some(ext)) => format!("{}({}).{}", base, counter, ext),
        (base, None) => format!("{}({})", base, counter),
    }
}

/// Returns a path that does not collide with an existing file.
///
/// If `exists(path)` is `false` the path is returned unchanged. Otherwise the
/// numbered candidates `base(1).ext`, `base(2).ext`, ... are probed in order and
/// the first one for which `exists` returns `false` is returned.
///
/// The existence check is injected so the probing order can be tested without
/// touching the filesystem; production callers pass `Path::exists`.
pub fn resolve_available_path<F>(path: &Path, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    if !exists(path) {
        return path.to_path_buf();
    }
    // A path without a final component (e.g. "..") cannot be renumbered.
    let Some(file_name) = path.file_name() else {
        return path.to_path_buf();
    };
    let file_name = file_name.to_string_lossy();

    let mut counter: u32 = 1;
    loop {
        let candidate = path.with_file_name(numbered_name(&file_name, counter));
        if !exists(&candidate) {
            debug!(
                "Resolved name collision for {:?} -> {:?}",
                path, candidate
            );
            return candidate;
        }
        counter += 1;
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    fn taken(names: &[&str]) -> HashSet<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_split_keeps_embedded_dots_in_base() {
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", Some("gz")));
        assert_eq!(split_file_name("notes.txt"), ("notes", Some("txt")));
        assert_eq!(split_file_name("README"), ("README", None));
    }

    #[test]
    fn test_numbered_name_without_extension_has_no_trailing_dot() {
        assert_eq!(numbered_name("README", 1), "README(1)");
        assert_eq!(numbered_name("notes.txt", 3), "notes(3).txt");
    }

    #[test]
    fn test_unchanged_when_original_is_free() {
        let existing = taken(&["other.txt"]);
        let resolved = resolve_available_path(Path::new("notes.txt"), |p| existing.contains(p));
        assert_eq!(resolved, PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_first_free_counter_wins() {
        let existing = taken(&["notes.txt"]);
        let resolved = resolve_available_path(Path::new("notes.txt"), |p| existing.contains(p));
        assert_eq!(resolved, PathBuf::from("notes(1).txt"));

        let existing = taken(&["notes.txt", "notes(1).txt", "notes(2).txt"]);
        let resolved = resolve_available_path(Path::new("notes.txt"), |p| existing.contains(p));
        assert_eq!(resolved, PathBuf::from("notes(3).txt"));
    }

    #[test]
    fn test_gap_in_sequence_is_reused() {
        // notes(1).txt is free even though notes(2).txt exists.
        let existing = taken(&["notes.txt", "notes(2).txt"]);
        let resolved = resolve_available_path(Path::new("notes.txt"), |p| existing.contains(p));
        assert_eq!(resolved, PathBuf::from("notes(1).txt"));
    }

    #[test]
    fn test_name_without_extension() {
        let existing = taken(&["README", "README(1)"]);
        let resolved = resolve_available_path(Path::new("README"), |p| existing.contains(p));
        assert_eq!(resolved, PathBuf::from("README(2)"));
    }

    #[test]
    fn test_candidates_stay_in_parent_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let original = dir.path().join("data.csv");
        fs::write(&original, "a,b")?;
        fs::write(dir.path().join("data(1).csv"), "c,d")?;

        let resolved = resolve_available_path(&original, Path::exists);
        assert_eq!(resolved, dir.path().join("data(2).csv"));
        Ok(())
    }
}
