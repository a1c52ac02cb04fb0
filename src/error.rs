//! Custom error types for bmp2text.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the bmp2text library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode a bitmap.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded image is smaller than the matrix it has to fill.
    #[error("image {path} is {width}x{height}, need at least {required}x{required}")]
    Dimensions {
        path: PathBuf,
        width: usize,
        height: usize,
        required: usize,
    },

    /// Failed to write a text matrix.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a text matrix.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File name pattern is not a valid glob.
    #[error("invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Directory entry could not be read while scanning.
    #[error("failed to scan directory: {source}")]
    Scan {
        #[source]
        source: glob::GlobError,
    },

    /// Text matrix contains a field other than `0`, `1` or empty.
    #[error("line {line}: unexpected field {field:?}")]
    Parse { line: usize, field: String },

    /// Text matrix rows have different lengths.
    #[error("line {line}: expected {expected} fields, got {actual}")]
    Ragged {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A file failed while the batch was running in fail-fast mode.
    #[error("conversion of {path} aborted the run: {source}")]
    Aborted {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for bmp2text operations.
pub type Result<T> = std::result::Result<T, Error>;
