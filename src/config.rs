//! Configuration file handling
//!
//! This module manages loading and parsing configuration from ~/.foldermap.toml

use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Display options
    #[serde(default)]
    pub display: DisplayConfig,

    /// Filter options
    #[serde(default)]
    pub filters: FilterConfig,
}

/// Display configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Show sizes by default
    #[serde(default)]
    pub show_size: bool,

    /// Show modification times by default
    #[serde(default)]
    pub show_time: bool,
}

/// Filter configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Show only folders by default
    #[serde(default)]
    pub only_folders: bool,

    /// Default max depth
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Default file name glob
    #[serde(default)]
    pub filter: Option<String>,
}

impl Config {
    /// Load configuration from ~/.foldermap.toml
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                log::debug!("Could not determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("No config file found at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        log::debug!("Loading config from {:?}", config_path);
        let content = fs::read_to_string(config_path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}

/// Get the path to the config file
fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".foldermap.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.display.show_size);
        assert!(!config.display.show_time);
        assert!(!config.filters.only_folders);
        assert_eq!(config.filters.max_depth, None);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.filters.filter.is_none());
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\nshow_size = true\n\n[filters]\nmax_depth = 3\nfilter = \"*.png\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.display.show_size);
        assert!(!config.display.show_time);
        assert_eq!(config.filters.max_depth, Some(3));
        assert_eq!(config.filters.filter.as_deref(), Some("*.png"));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display\nshow_size = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::TomlError(_))));
    }
}
