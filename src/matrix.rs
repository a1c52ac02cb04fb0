//! Black/white classification of pixel grids and the text matrix format.
//!
//! A text matrix has one line per grid row. Each line holds one field per
//! column separated by `,`: `1` for white, `0` for black, and an empty field
//! for any other intensity.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::image::{PixelGrid, BLACK, WHITE};

/// Field separator between columns.
pub const SEPARATOR: &str = ",";

/// Classification of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Intensity exactly 0.
    Black,
    /// Intensity exactly 255.
    White,
    /// Any intensity strictly between 0 and 255.
    Unrecognized,
}

impl Symbol {
    /// Classify an intensity by exact match against the extremes.
    ///
    /// Intensities in `1..=254` are not rounded to the nearest extreme.
    #[must_use]
    pub const fn classify(intensity: u8) -> Self {
        match intensity {
            WHITE => Self::White,
            BLACK => Self::Black,
            _ => Self::Unrecognized,
        }
    }

    /// Text of this symbol inside a matrix line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "0",
            Self::White => "1",
            Self::Unrecognized => "",
        }
    }

    /// Numeric value of a recognized symbol.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Black => Some(0),
            Self::White => Some(1),
            Self::Unrecognized => None,
        }
    }

    fn parse(field: &str) -> Option<Self> {
        match field {
            "0" => Some(Self::Black),
            "1" => Some(Self::White),
            "" => Some(Self::Unrecognized),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the top-left `size` x `size` region of `grid` as matrix lines.
///
/// Lines carry no terminator. Pixels beyond the region are ignored. `source`
/// names the image the grid was decoded from and is only used in errors.
///
/// # Errors
///
/// Returns [`Error::Dimensions`] if the grid has fewer than `size` rows or
/// columns. Nothing is formatted in that case.
pub fn format_grid(grid: &PixelGrid, size: usize, source: &Path) -> Result<Vec<String>> {
    let (height, width) = grid.dim();
    if height < size || width < size {
        return Err(Error::Dimensions {
            path: source.to_path_buf(),
            width,
            height,
            required: size,
        });
    }

    let lines = grid
        .outer_iter()
        .take(size)
        .map(|row| {
            row.iter()
                .take(size)
                .map(|&px| Symbol::classify(px).as_str())
                .collect::<Vec<_>>()
                .join(SEPARATOR)
        })
        .collect();

    Ok(lines)
}

/// A text matrix read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<Symbol>>,
}

impl Matrix {
    /// Parse matrix text, one row per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a field that is not `0`, `1` or empty and
    /// [`Error::Ragged`] when rows differ in length. Line numbers are 1-based.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<Symbol>> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let row = line
                .split(SEPARATOR)
                .map(|field| {
                    Symbol::parse(field).ok_or_else(|| Error::Parse {
                        line: line_no,
                        field: field.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(Error::Ragged {
                        line: line_no,
                        expected: first.len(),
                        actual: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Rows of symbols, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// One sample per line: the recognized pixels of each row as 0/1 values.
    ///
    /// Unrecognized pixels contribute nothing, the same way a reader that
    /// drops separators sees the line.
    #[must_use]
    pub fn samples(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().filter_map(|symbol| symbol.value()).collect())
            .collect()
    }
}

/// Read and parse a text matrix file.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read, or any error of
/// [`Matrix::parse`].
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Matrix::parse(&text)
}
