//! Configuration loading and persistence with atomic file operations.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{ConfigFormat, I18nConfig};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Configuration loader with atomic file operations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from file.
    pub fn load(&self) -> ConfigResult<I18nConfig> {
        let format = self.format()?;
        debug!(path = %self.path.display(), ?format, "Loading configuration");

        let content = fs::read_to_string(&self.path)?;
        let config = Self::parse(&content, format)?;

        info!(
            path = %self.path.display(),
            locales = ?config.locales,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parses and validates in-memory configuration content.
    pub fn parse(content: &str, format: ConfigFormat) -> ConfigResult<I18nConfig> {
        let config: I18nConfig = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file atomically.
    ///
    /// The document is written to a temporary file in the target directory
    /// and renamed over the destination.
    pub fn save(&self, config: &I18nConfig) -> ConfigResult<()> {
        config.validate()?;
        let format = self.format()?;

        let content = match format {
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        };

        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        info!(path = %self.path.display(), "Configuration saved");
        Ok(())
    }

    fn format(&self) -> ConfigResult<ConfigFormat> {
        ConfigFormat::from_path(&self.path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(self.path.clone()))
    }
}
