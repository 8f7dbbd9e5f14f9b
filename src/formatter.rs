//! Output formatting
//!
//! This module turns scan results into report text: the header block, the
//! tree connectors, file type icons and the optional size and time details
//! appended to each entry line.

use crate::{Args, Config, Result, TreeStats};
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

/// Icon shown in front of folder names
pub const FOLDER_ICON: &str = "📁";

/// Icon shown for files without a recognised suffix
pub const FILE_ICON: &str = "📄";

/// Placeholder when a folder's recursive size cannot be computed
pub const FOLDER_SIZE_FAILED: &str = " (size calculation failed)";

/// Placeholder when a file's size cannot be read
pub const FILE_SIZE_FAILED: &str = " (size retrieval failed)";

/// Placeholder when a modification time cannot be read
pub const TIME_FAILED: &str = " [time retrieval failed]";

/// Suffix classes checked in order; the first match picks the icon
const ICON_CLASSES: &[(&[&str], &str)] = &[
    (&[".jpg", ".jpeg", ".png", ".gif", ".bmp"], "🖼️"),
    (&[".mp4", ".avi", ".mov", ".mkv"], "🎬"),
    (&[".mp3", ".wav", ".flac"], "🎵"),
    (&[".zip", ".rar", ".7z", ".tar", ".gz"], "📦"),
    (&[".py", ".java", ".cpp", ".js", ".html", ".css"], "📝"),
    (&[".pdf"], "📑"),
    (&[".doc", ".docx"], "📃"),
    (&[".xls", ".xlsx"], "📊"),
    (&[".ppt", ".pptx"], "📽️"),
];

/// Options for formatting entry lines
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Show file sizes and recursive folder sizes
    pub show_size: bool,
    /// Show modification times
    pub show_time: bool,
}

impl FormatOptions {
    /// Create format options from args and config
    pub fn from_args_and_config(args: &Args, config: &Config) -> Self {
        Self {
            show_size: args.show_size || config.display.show_size,
            show_time: args.show_time || config.display.show_time,
        }
    }
}

/// Tree drawing characters
pub struct TreeChars;

impl TreeChars {
    /// Connector for an entry with later siblings
    pub const MID: &'static str = "├── ";
    /// Connector for the last entry of a listing
    pub const LAST: &'static str = "└── ";
    /// Prefix segment below a non-last entry
    pub const DOWN: &'static str = "│   ";
    /// Prefix segment below a last entry
    pub const BLANK: &'static str = "    ";

    /// Connector for an entry
    pub fn connector(is_last: bool) -> &'static str {
        if is_last {
            Self::LAST
        } else {
            Self::MID
        }
    }

    /// Prefix handed to the children of an entry
    pub fn child_prefix(prefix: &str, is_last: bool) -> String {
        let segment = if is_last { Self::BLANK } else { Self::DOWN };
        format!("{}{}", prefix, segment)
    }
}

/// Pick the display icon for a file name
pub fn file_icon(name: &str) -> &'static str {
    ICON_CLASSES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|suffix| name.ends_with(suffix)))
        .map(|(_, icon)| *icon)
        .unwrap_or(FILE_ICON)
}

/// Build one report line, without the trailing newline
pub fn entry_line(prefix: &str, is_last: bool, icon: &str, name: &str, details: &str) -> String {
    format!("{}{}{} {}{}", prefix, TreeChars::connector(is_last), icon, name, details)
}

/// Size detail appended to an entry line, or the given placeholder
pub fn size_detail(size: Option<u64>, failed: &str) -> String {
    match size {
        Some(size) => format!(" ({})", format_size(size)),
        None => failed.to_string(),
    }
}

/// Modification time detail appended to an entry line
pub fn time_detail(modified: Option<SystemTime>) -> String {
    match modified {
        Some(modified) => format!(" [modified: {}]", format_mtime(modified)),
        None => TIME_FAILED.to_string(),
    }
}

/// Format size in human-readable format
///
/// Binary units with two decimals from KB upwards; GB is the largest unit.
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size < KB {
        format!("{} B", size)
    } else if size < MB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else if size < GB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else {
        format!("{:.2} GB", size as f64 / GB as f64)
    }
}

/// Format a modification time in the local timezone
pub fn format_mtime(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Write the report header block, including the blank separator line
pub fn write_header(
    out: &mut dyn Write,
    root: &Path,
    stats: &TreeStats,
    scanned_at: DateTime<Local>,
) -> Result<()> {
    writeln!(out, "# Folder structure: {}", root.display())?;
    writeln!(out, "# Scan time: {}", scanned_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "# Total folders: {}", stats.folder_count)?;
    writeln!(out, "# Total files: {}", stats.file_count)?;
    writeln!(out)?;
    Ok(())
}
