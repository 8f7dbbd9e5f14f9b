//! Error types for foldermap
//!
//! This module defines the error types that abort a scan. Failures that are
//! recovered per entry (unreadable directories, missing metadata) never become
//! an `Error`; they are rendered inline in the report instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for foldermap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for foldermap
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors from filesystem operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid glob filter pattern
    #[error("Invalid filter pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The folder to scan does not exist
    #[error("Folder does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let err = Error::PathNotFound(PathBuf::from("/does/not/exist"));
        assert_eq!(err.to_string(), "Folder does not exist: /does/not/exist");
    }

    #[test]
    fn test_pattern_error_conversion() {
        let err: Error = glob::Pattern::new("[").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid filter pattern"));
    }
}
