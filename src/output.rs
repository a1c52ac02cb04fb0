//! Text matrix output files.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to the full input file name.
pub const OUTPUT_SUFFIX: &str = ".txt";

/// Output path for an input image: `digit.bmp` becomes `digit.bmp.txt`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Write `lines` to `path`, each followed by a newline.
///
/// An existing file is truncated. The handle is closed when this returns,
/// whether or not the write succeeded. The write is not atomic, so a failure
/// part way through can leave a partial file behind.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be created or written.
pub fn write_lines<P, S>(path: P, lines: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(to_error)?;
        writer.write_all(b"\n").map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;

    Ok(())
}
