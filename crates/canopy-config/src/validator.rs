//! Runtime validation of locale configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::I18nConfig;
use unic_langid::LanguageIdentifier;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// The locale list must be non-empty, hold well-formed language
    /// identifiers without duplicates, and contain the default locale.
    pub fn validate(config: &I18nConfig) -> ConfigResult<()> {
        if config.locales.is_empty() {
            return Err(ConfigError::Invalid(
                "At least one locale must be configured".to_string(),
            ));
        }

        for (index, locale) in config.locales.iter().enumerate() {
            Self::validate_locale(locale)?;
            if config.locales[..index].contains(locale) {
                return Err(ConfigError::Invalid(format!(
                    "Locale '{locale}' is listed more than once"
                )));
            }
        }

        if let Some(default) = &config.default_locale {
            if !config.locales.contains(default) {
                return Err(ConfigError::Invalid(format!(
                    "Default locale '{default}' is not one of the configured locales"
                )));
            }
        }

        Ok(())
    }

    /// Check that a single locale is a well-formed language identifier.
    pub fn validate_locale(locale: &str) -> ConfigResult<LanguageIdentifier> {
        locale.parse::<LanguageIdentifier>().map_err(|e| {
            ConfigError::Invalid(format!("Invalid locale identifier '{locale}': {e}"))
        })
    }
}
