//! Error types for configuration handling.

use canopy_i18n::I18nError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing failed
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// YAML parsing or serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not map to a supported format
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Building core values from the configuration failed
    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
