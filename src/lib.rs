//! # `bmp2text`
//!
//! Convert a directory of bitmap images into comma-separated text matrices.
//!
//! Every pixel in the top-left `grid_size` x `grid_size` region (28 by
//! default) is flattened to grayscale and classified by exact match: white
//! (255) becomes `1`, black (0) becomes `0`, anything else an empty field.
//! The result for `digit.bmp` is written to `digit.bmp.txt`.
//!
//! ## Example
//!
//! ```no_run
//! use bmp2text::{Config, Converter};
//!
//! # fn main() -> bmp2text::Result<()> {
//! let converter = Converter::new(Config::default())?;
//! let summary = converter.run("digits", &mut std::io::stdout())?;
//! assert!(summary.is_success());
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod error;
pub mod image;
pub mod matrix;
pub mod output;
pub mod scan;

pub use converter::{Config, Converter, Summary};
pub use error::{Error, Result};
pub use matrix::{Matrix, Symbol};
