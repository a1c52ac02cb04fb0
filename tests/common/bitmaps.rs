use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Writes a uniformly gray RGB bitmap and returns its path.
pub fn solid_bmp(dir: &Path, name: &str, size: (u32, u32), value: u8) -> PathBuf {
    let img = RgbImage::from_pixel(size.0, size.1, Rgb([value, value, value]));
    save(dir, name, &img)
}

/// Writes a bitmap whose pixel at `(x, y)` is produced by `f`.
pub fn bmp_from_fn<F>(dir: &Path, name: &str, size: (u32, u32), f: F) -> PathBuf
where
    F: Fn(u32, u32) -> u8,
{
    let img = RgbImage::from_fn(size.0, size.1, |x, y| {
        let v = f(x, y);
        Rgb([v, v, v])
    });
    save(dir, name, &img)
}

fn save(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("failed to write test bitmap");
    path
}

/// Collects the status lines a run wrote.
pub fn status_lines(buffer: &[u8]) -> Vec<String> {
    String::from_utf8(buffer.to_vec())
        .expect("status output is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}
