//! Filtering and depth control
//!
//! This module decides which entries of a listed directory end up in the
//! report, and how deep the renderer is allowed to descend.

use crate::{Args, Config, Result};
use glob::Pattern;

/// Options for filtering directory entries
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Maximum depth to traverse (unbounded when `None`)
    pub max_depth: Option<usize>,
    /// Show only folders
    pub only_folders: bool,
    /// File name glob
    pub pattern: Option<Pattern>,
}

impl FilterOptions {
    /// Create filter options from command line arguments and config
    pub fn from_args_and_config(args: &Args, config: &Config) -> Result<Self> {
        let mut opts = Self {
            max_depth: args.max_depth.or(config.filters.max_depth),
            only_folders: args.only_folders || config.filters.only_folders,
            pattern: None,
        };

        // Compile the glob up front so a bad pattern fails before traversal
        if let Some(pattern) = args.filter.as_ref().or(config.filters.filter.as_ref()) {
            opts.pattern = Some(Pattern::new(pattern)?);
        }

        Ok(opts)
    }

    /// Set the file name glob
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Whether the directory at `depth` may have its children listed
    pub fn within_depth(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max_depth) => depth <= max_depth,
            None => true,
        }
    }

    /// Check if an entry with this display name should be emitted.
    ///
    /// Directories always pass; files are dropped in only-folders mode and
    /// must match the glob when one is configured.
    pub fn should_include(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            return true;
        }

        if self.only_folders {
            return false;
        }

        match &self.pattern {
            Some(pattern) => pattern.matches(name),
            None => true,
        }
    }
}
