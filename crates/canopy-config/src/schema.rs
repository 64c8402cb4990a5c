//! Configuration schema definitions using serde.

use crate::error::ConfigResult;
use canopy_common::LoggingConfig;
use canopy_i18n::{Builder, LocaleSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locale configuration for an application using Canopy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Supported locales in declaration order.
    pub locales: Vec<String>,
    /// Fallback locale; the first entry of `locales` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// On-disk configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// YAML document
    Yaml,
    /// JSON document
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl I18nConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        crate::validator::ConfigValidator::validate(self)
    }

    /// Build the locale set described by this configuration.
    pub fn locale_set(&self) -> ConfigResult<LocaleSet> {
        self.validate()?;
        let set = LocaleSet::new(self.locales.iter().cloned())?;
        match &self.default_locale {
            Some(locale) => Ok(set.with_default(locale)?),
            None => Ok(set),
        }
    }

    /// Start an empty message builder over the configured locales.
    pub fn builder(&self) -> ConfigResult<Builder> {
        Ok(Builder::new(self.locale_set()?))
    }
}
