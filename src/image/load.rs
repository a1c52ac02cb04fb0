//! Image loading utilities.

use std::path::Path;

use image::DynamicImage;

use crate::error::{Error, Result};

use super::PixelGrid;

/// Load an image from disk and flatten it to a grayscale grid.
///
/// Color channels are combined into a single luminance value per pixel
/// using the `image` crate's weighted conversion. The grid keeps the source
/// dimensions; nothing is resized or cropped here.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be opened or is not a
/// supported image.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = image_to_grid(img);
    tracing::debug!(
        "Decoded {} as {}x{} grayscale",
        path.display(),
        grid.ncols(),
        grid.nrows()
    );

    Ok(grid)
}

/// Convert a `DynamicImage` to a row-major luminance grid.
#[allow(clippy::cast_possible_truncation)]
fn image_to_grid(img: DynamicImage) -> PixelGrid {
    let luma = img.into_luma8();
    let (width, height) = luma.dimensions();

    // Safe: indices are bounded by the image's own u32 dimensions
    PixelGrid::from_shape_fn((height as usize, width as usize), |(row, col)| {
        luma.get_pixel(col as u32, row as u32)[0]
    })
}
