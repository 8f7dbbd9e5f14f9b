//! foldermap - Write a folder's structure to a text file
//!
//! This crate walks a folder recursively and writes a human-readable,
//! tree-style report of its layout, for documentation or auditing.
//!
//! # Features
//!
//! - **Tree output**: `├──`/`└──` connectors with nested prefixes, sorted by name
//! - **Icons**: folder icon plus file icons chosen by file name suffix
//! - **Details**: optional sizes (recursive for folders) and modification times
//! - **Filtering**: depth limit, folders-only mode and a file name glob
//! - **Header**: unfiltered folder/file totals and scan time
//! - **Configuration**: defaults from a .foldermap.toml config file
//!
//! A scan fails as a whole only when the folder does not exist or the entry
//! count cannot be completed. Everything that goes wrong below the root while
//! rendering is reported inline and the walk carries on.

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod formatter;
pub mod stats;
pub mod walker;

pub use cli::Args;
pub use config::Config;
pub use error::{Error, Result};
pub use filters::FilterOptions;
pub use formatter::FormatOptions;
pub use stats::{count_entries, TreeStats};
pub use walker::{DirChild, TreeRenderer};

use chrono::Local;
use std::error::Error as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of a successful scan
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Absolute path of the scanned folder
    pub root: PathBuf,
    /// Unfiltered totals written to the header
    pub stats: TreeStats,
    /// Number of body lines written
    pub lines: usize,
}

/// Main entry point for the foldermap binary
///
/// Resolves options from `args` and `config`, scans the folder and writes
/// the report to `args.output`. Errors are logged here; the return value
/// only says whether the report was written.
///
/// # Example
///
/// ```no_run
/// use foldermap::{run, Args, Config};
/// use std::path::PathBuf;
///
/// let args = Args {
///     folder: PathBuf::from("."),
///     ..Args::default()
/// };
/// assert!(run(&args, &Config::default()));
/// ```
pub fn run(args: &Args, config: &Config) -> bool {
    let result = FilterOptions::from_args_and_config(args, config).and_then(|filter_opts| {
        let format_opts = FormatOptions::from_args_and_config(args, config);
        scan_folder(&args.folder, &args.output, &filter_opts, &format_opts)
    });

    match result {
        Ok(_) => true,
        Err(e) => {
            log::error!("{}", e);

            // Log chain of errors if any
            let mut source = e.source();
            while let Some(err) = source {
                log::error!("  Caused by: {}", err);
                source = err.source();
            }

            false
        }
    }
}

/// Scan `root` and write the report to the file at `output`.
///
/// The output file is truncated. It is only created once the folder is known
/// to exist and the entry count has succeeded.
pub fn scan_folder(
    root: &Path,
    output: &Path,
    filter_opts: &FilterOptions,
    format_opts: &FormatOptions,
) -> Result<ScanSummary> {
    let (root, stats) = prepare(root)?;

    let file = File::create(output)?;
    log::info!("Writing folder structure to {}", output.display());
    let lines = write_report(BufWriter::new(file), &root, &stats, filter_opts, format_opts)?;
    log::info!("Folder structure written to {}", output.display());

    Ok(ScanSummary { root, stats, lines })
}

/// Scan `root` and write the report to any writer
pub fn render_report<W: Write>(
    root: &Path,
    filter_opts: &FilterOptions,
    format_opts: &FormatOptions,
    out: W,
) -> Result<ScanSummary> {
    let (root, stats) = prepare(root)?;
    let lines = write_report(out, &root, &stats, filter_opts, format_opts)?;
    Ok(ScanSummary { root, stats, lines })
}

/// Validate the root, make it absolute and count its entries
fn prepare(root: &Path) -> Result<(PathBuf, TreeStats)> {
    if !root.exists() {
        return Err(Error::PathNotFound(root.to_path_buf()));
    }
    let root = std::path::absolute(root)?;

    log::info!("Counting entries in {}", root.display());
    let stats = count_entries(&root)?;
    log::info!(
        "Found {} folders and {} files",
        stats.folder_count,
        stats.file_count
    );

    Ok((root, stats))
}

/// Write header and body, returning the number of body lines
fn write_report<W: Write>(
    mut out: W,
    root: &Path,
    stats: &TreeStats,
    filter_opts: &FilterOptions,
    format_opts: &FormatOptions,
) -> Result<usize> {
    formatter::write_header(&mut out, root, stats, Local::now())?;

    let mut renderer = TreeRenderer::new(out, filter_opts.clone(), *format_opts);
    renderer.render(root)?;

    Ok(renderer.lines_written())
}
