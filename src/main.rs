//! `bmp2text` CLI - Convert bitmaps into black/white text matrices.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bmp2text::{Config, Converter};

/// Convert every bitmap in a directory into a comma-separated text matrix.
#[derive(Parser, Debug)]
#[command(name = "bmp2text")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the bitmaps.
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Rows and columns encoded from the top-left of each image.
    #[arg(short, long, default_value = "28", value_name = "INT")]
    size: usize,

    /// File name pattern selecting the input images.
    #[arg(short, long, default_value = "*.bmp", value_name = "GLOB")]
    pattern: String,

    /// Stop at the first file that fails instead of skipping it.
    #[arg(long)]
    fail_fast: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the status lines
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bmp2text={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    if !args.dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {}", args.dir.display());
    }

    let config = Config {
        grid_size: args.size,
        pattern: args.pattern.clone(),
        fail_fast: args.fail_fast,
    };

    let converter = Converter::new(config).context("Invalid configuration")?;

    let summary = converter
        .run(&args.dir, &mut io::stdout().lock())
        .context("Conversion failed")?;

    if !summary.is_success() {
        tracing::warn!(
            "{} of {} file(s) failed",
            summary.failed.len(),
            summary.total()
        );
        for (path, err) in &summary.failed {
            tracing::warn!("  {}: {err}", path.display());
        }
    }

    Ok(summary.is_success())
}
