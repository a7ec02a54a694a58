//! User configuration stored as JSON.
//!
//! The file lives at `<config dir>/file-navigator/config.json` unless a path
//! is given on the command line. A missing file means defaults; a file that
//! exists but cannot be read or parsed is an error.

use crate::core::dirs::get_config_file;
use crate::core::error::{FileNavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory to open instead of the home directory
    pub start_directory: Option<PathBuf>,
    /// Colored output
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_directory: None,
            color: true,
        }
    }
}

impl AppConfig {
    /// Loads from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_file()?,
        };
        Self::load_from(&config_file)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| FileNavigatorError::config_read_failed(config_file, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| FileNavigatorError::config_parse_failed(config_file, e))?;
        log::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }

    #[cfg(test)]
    fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(parent) = config_file.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FileNavigatorError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)
            .map_err(|e| FileNavigatorError::config_write_failed(config_file, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let config = AppConfig::load_from(&dir.path().join("config.json"))?;
        assert_eq!(config, AppConfig::default());
        assert!(config.color);
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("nested/config.json");
        let config = AppConfig {
            start_directory: Some(PathBuf::from("/srv/files")),
            color: false,
        };
        config.save_to(&file)?;

        let loaded = AppConfig::load(Some(&file))?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("config.json");
        std::fs::write(&file, r#"{ "color": false }"#)?;

        let loaded = AppConfig::load_from(&file)?;
        assert_eq!(loaded.start_directory, None);
        assert!(!loaded.color);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("config.json");
        std::fs::write(&file, "{ not json")?;

        let result = AppConfig::load_from(&file);
        assert!(matches!(
            result,
            Err(FileNavigatorError::ConfigParseFailed { .. })
        ));
        Ok(())
    }
}
