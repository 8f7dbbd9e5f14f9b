//! Command-line interface argument parsing
//!
//! This module defines all command-line arguments and options for foldermap
//! using the clap crate with derive macros for a clean, declarative API.

use chrono::Local;
use clap::Parser;
use std::path::PathBuf;

/// Default name of the report file
pub const DEFAULT_OUTPUT: &str = "folder_structure.txt";

/// foldermap - Write a folder's structure to a text file
///
/// Recursively walks a folder and writes an indented, tree-style report with
/// optional sizes, modification times, depth limit and file name filter.
#[derive(Parser, Debug, Clone)]
#[command(name = "foldermap")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The folder to scan
    #[arg(long, value_name = "PATH")]
    pub folder: PathBuf,

    /// File the report is written to (overwritten if it exists)
    #[arg(long, default_value = DEFAULT_OUTPUT, value_name = "FILE")]
    pub output: PathBuf,

    /// Maximum recursion depth (0 lists only the folder's own entries)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Show file sizes and recursive folder sizes
    #[arg(long)]
    pub show_size: bool,

    /// Show modification times
    #[arg(long)]
    pub show_time: bool,

    /// Show only folders
    #[arg(long)]
    pub only_folders: bool,

    /// Only show files whose name matches this glob (e.g. *.jpg)
    #[arg(long, value_name = "GLOB")]
    pub filter: Option<String>,

    /// Also write log records to a timestamped log file in the working directory
    #[arg(long)]
    pub log: bool,

    /// Also write log records to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_depth: None,
            show_size: false,
            show_time: false,
            only_folders: false,
            filter: None,
            log: false,
            log_file: None,
            verbose: false,
        }
    }
}

impl Args {
    /// File that log records are copied to, if any.
    ///
    /// An explicit `--log-file` wins over `--log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        match (&self.log_file, self.log) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(timestamped_log_name())),
            (None, false) => None,
        }
    }
}

/// Log file name stamped with the current local time
fn timestamped_log_name() -> String {
    format!("folder_structure_{}.log", Local::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "foldermap",
            "--folder",
            "/tmp/photos",
            "--output",
            "out.txt",
            "--max-depth",
            "2",
            "--show-size",
            "--show-time",
            "--only-folders",
            "--filter",
            "*.jpg",
        ])
        .unwrap();

        assert_eq!(args.folder, PathBuf::from("/tmp/photos"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.max_depth, Some(2));
        assert!(args.show_size);
        assert!(args.show_time);
        assert!(args.only_folders);
        assert_eq!(args.filter.as_deref(), Some("*.jpg"));
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Args::try_parse_from(["foldermap"]).is_err());
    }

    #[test]
    fn test_default_output() {
        let args = Args::try_parse_from(["foldermap", "--folder", "."]).unwrap();
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.max_depth, None);
    }

    #[test]
    fn test_log_path() {
        assert_eq!(Args::default().log_path(), None);

        let args = Args {
            log: true,
            ..Default::default()
        };
        let name = args.log_path().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("folder_structure_"));
        assert!(name.ends_with(".log"));
        // folder_structure_YYYYMMDD_HHMMSS.log
        assert_eq!(name.len(), "folder_structure_".len() + 15 + ".log".len());

        let args = Args {
            log: true,
            log_file: Some(PathBuf::from("scan.log")),
            ..Default::default()
        };
        assert_eq!(args.log_path(), Some(PathBuf::from("scan.log")));
    }
}
