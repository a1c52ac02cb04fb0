//! Bitmap discovery in a single directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default file name pattern for input bitmaps.
pub const DEFAULT_PATTERN: &str = "*.bmp";

/// List the regular files directly inside `dir` whose names match `pattern`.
///
/// Subdirectories are not searched, and directories whose names happen to
/// match are skipped. Paths come back in the order the glob walk yields them.
///
/// # Errors
///
/// Returns [`Error::Pattern`] if `pattern` is not a valid glob and
/// [`Error::Scan`] if a directory entry cannot be read.
pub fn find_bitmaps<P: AsRef<Path>>(dir: P, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    let full = format!(
        "{}/{pattern}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    tracing::debug!("Scanning {full}");

    // Hidden files are not inputs, as with a shell glob
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let entries = glob::glob_with(&full, options).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| Error::Scan { source })?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
