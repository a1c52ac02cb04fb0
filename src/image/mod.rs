//! Bitmap decoding into grayscale pixel grids.

mod load;

pub use load::load_grayscale;

use ndarray::Array2;

/// Grayscale intensities indexed `[row, column]`, shape `(height, width)`.
pub type PixelGrid = Array2<u8>;

/// Intensity of a pure white pixel after grayscale flattening.
pub const WHITE: u8 = u8::MAX;

/// Intensity of a pure black pixel after grayscale flattening.
pub const BLACK: u8 = 0;
