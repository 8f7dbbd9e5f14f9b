//! Tree rendering walker
//!
//! This module performs the depth-first traversal that produces the report
//! body. Each visited entry becomes exactly one line, written before any of
//! its children, so nothing but one directory listing is held in memory at
//! a time.
//!
//! Failures below the root never abort the walk: a folder that cannot be
//! listed gets a placeholder line, and size or time lookups that fail are
//! replaced by placeholder details.

use crate::formatter::{
    entry_line, file_icon, size_detail, time_detail, TreeChars, FILE_SIZE_FAILED, FOLDER_ICON,
    FOLDER_SIZE_FAILED,
};
use crate::stats::calculate_dir_size;
use crate::{FilterOptions, FormatOptions, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A single entry of a directory listing
#[derive(Debug, Clone)]
pub struct DirChild {
    /// Display name (final path component)
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Is this a folder? Follows symlinks.
    pub is_dir: bool,
    /// Is this a symlink?
    pub is_symlink: bool,
}

impl DirChild {
    /// Whether the entry counter should descend into this entry.
    ///
    /// The renderer follows symlinked folders; the counter does not.
    pub fn descends(&self) -> bool {
        self.is_dir && !self.is_symlink
    }
}

/// List the immediate children of a folder, sorted by name.
///
/// The sort compares raw file names, which gives a stable byte ordering
/// independent of locale.
pub fn read_children(path: &Path) -> io::Result<Vec<DirChild>> {
    let mut children = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child_path = entry.path();
        let file_type = entry.file_type()?;
        let is_symlink = file_type.is_symlink();

        let is_dir = if is_symlink {
            fs::metadata(&child_path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            file_type.is_dir()
        };

        children.push(DirChild {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: child_path,
            is_dir,
            is_symlink,
        });
    }

    children.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    Ok(children)
}

/// Renders the report body for a folder into any writer
pub struct TreeRenderer<W: Write> {
    out: W,
    filter_opts: FilterOptions,
    format_opts: FormatOptions,
    lines: usize,
}

impl<W: Write> TreeRenderer<W> {
    /// Create a new renderer writing to `out`
    pub fn new(out: W, filter_opts: FilterOptions, format_opts: FormatOptions) -> Self {
        Self {
            out,
            filter_opts,
            format_opts,
            lines: 0,
        }
    }

    /// Render the tree below `root`. The root itself gets no line.
    pub fn render(&mut self, root: &Path) -> Result<()> {
        self.walk_and_print_tree(root, "", 0)?;
        self.out.flush()?;
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Walk one folder and print its children
    fn walk_and_print_tree(&mut self, path: &Path, prefix: &str, depth: usize) -> Result<()> {
        // Check depth
        if !self.filter_opts.within_depth(depth) {
            return Ok(());
        }

        let children = match read_children(path) {
            Ok(children) => children,
            Err(e) => {
                log::warn!("Cannot list {:?}: {}", path, e);
                let placeholder = listing_failure(&e);
                self.write_line(&format!("{}{}{}", prefix, TreeChars::MID, placeholder))?;
                return Ok(());
            }
        };

        // Filter before indexing so the last emitted entry gets the last connector
        let children: Vec<DirChild> = children
            .into_iter()
            .filter(|child| self.filter_opts.should_include(&child.name, child.is_dir))
            .collect();
        let child_count = children.len();

        for (i, child) in children.iter().enumerate() {
            let is_last = i == child_count - 1;

            if child.is_dir {
                self.print_folder(child, prefix, is_last)?;

                let child_prefix = TreeChars::child_prefix(prefix, is_last);
                self.walk_and_print_tree(&child.path, &child_prefix, depth + 1)?;
            } else {
                self.print_file(child, prefix, is_last)?;
            }
        }

        Ok(())
    }

    /// Print a folder line
    fn print_folder(&mut self, child: &DirChild, prefix: &str, is_last: bool) -> Result<()> {
        let mut details = String::new();

        if self.format_opts.show_size {
            let size = calculate_dir_size(&child.path)
                .map_err(|e| log::debug!("Size calculation failed for {:?}: {}", child.path, e))
                .ok();
            details.push_str(&size_detail(size, FOLDER_SIZE_FAILED));
        }

        if self.format_opts.show_time {
            details.push_str(&time_detail(modified_time(&child.path)));
        }

        let line = entry_line(prefix, is_last, FOLDER_ICON, &child.name, &details);
        self.write_line(&line)
    }

    /// Print a file line
    fn print_file(&mut self, child: &DirChild, prefix: &str, is_last: bool) -> Result<()> {
        let mut details = String::new();

        if self.format_opts.show_size {
            let size = fs::metadata(&child.path)
                .map(|m| m.len())
                .map_err(|e| log::debug!("Size lookup failed for {:?}: {}", child.path, e))
                .ok();
            details.push_str(&size_detail(size, FILE_SIZE_FAILED));
        }

        if self.format_opts.show_time {
            details.push_str(&time_detail(modified_time(&child.path)));
        }

        let line = entry_line(prefix, is_last, file_icon(&child.name), &child.name, &details);
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.lines += 1;
        Ok(())
    }
}

/// Placeholder text for a folder that could not be listed
fn listing_failure(err: &io::Error) -> String {
    if err.kind() == io::ErrorKind::PermissionDenied {
        "[cannot access: permission denied]".to_string()
    } else {
        format!("[error: {}]", err)
    }
}

/// Modification time, following symlinks
fn modified_time(path: &Path) -> Option<std::time::SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| log::debug!("Time lookup failed for {:?}: {}", path, e))
        .ok()
}
