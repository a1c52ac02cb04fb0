//! Batch conversion of a directory of bitmaps into text matrices.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image;
use crate::matrix;
use crate::output;
use crate::scan;

/// Status line written after every file has been handled.
pub const FINISHED: &str = "Finished.";

/// Configuration for the converter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rows and columns of the encoded region.
    pub grid_size: usize,

    /// Glob matched against file names in the input directory.
    pub pattern: String,

    /// Abort the whole batch on the first failing file.
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 28,
            pattern: scan::DEFAULT_PATTERN.to_string(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidParameter {
                name: "grid_size".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.pattern.is_empty() {
            return Err(Error::InvalidParameter {
                name: "pattern".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.pattern.contains(['/', '\\']) {
            return Err(Error::InvalidParameter {
                name: "pattern".to_string(),
                reason: "must match file names, not paths".to_string(),
            });
        }

        glob::Pattern::new(&self.pattern).map_err(|source| Error::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Output files written, in processing order.
    pub converted: Vec<PathBuf>,

    /// Input files that failed, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

impl Summary {
    /// True when no file failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of input files handled.
    #[must_use]
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Converts bitmaps into text matrices.
#[derive(Debug, Clone)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a new converter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Initializing converter with config: {config:?}");
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one bitmap and write `<input>.txt` next to it.
    ///
    /// Returns the path of the written file. If decoding or the size check
    /// fails, no output file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`], [`Error::Dimensions`] or [`Error::Write`].
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();

        let grid = image::load_grayscale(input_path)?;
        let lines = matrix::format_grid(&grid, self.config.grid_size, input_path)?;

        let output_path = output::output_path(input_path);
        output::write_lines(&output_path, &lines)?;

        tracing::info!(
            "Wrote {} -> {}",
            input_path.display(),
            output_path.display()
        );
        Ok(output_path)
    }

    /// Convert every matching bitmap in `dir`.
    ///
    /// Writes `Processing <file name>` to `status` before each file and
    /// `Finished.` after the last one. A failing file is logged and recorded
    /// in the summary and the batch moves on, unless `fail_fast` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be scanned, if `status`
    /// cannot be written, or, in fail-fast mode, [`Error::Aborted`] for the
    /// first failing file. `Finished.` is not written in these cases.
    pub fn run<P, W>(&self, dir: P, status: &mut W) -> Result<Summary>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let dir = dir.as_ref();
        let files = scan::find_bitmaps(dir, &self.config.pattern)?;
        tracing::info!("Found {} file(s) in {}", files.len(), dir.display());

        let mut summary = Summary::default();
        for path in files {
            let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
            write_status(status, &format!("Processing {name}"))?;

            match self.convert_file(&path) {
                Ok(output_path) => summary.converted.push(output_path),
                Err(err) if self.config.fail_fast => {
                    return Err(Error::Aborted {
                        path,
                        source: Box::new(err),
                    });
                }
                Err(err) => {
                    tracing::error!("Skipping {}: {err}", path.display());
                    summary.failed.push((path, err));
                }
            }
        }

        write_status(status, FINISHED)?;
        Ok(summary)
    }
}

fn write_status<W: Write>(status: &mut W, line: &str) -> Result<()> {
    writeln!(status, "{line}")?;
    Ok(())
}
