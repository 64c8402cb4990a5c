//! Default configuration values.

use crate::schema::I18nConfig;
use canopy_common::LoggingConfig;

/// Locale used when no configuration is provided.
pub const DEFAULT_LOCALE: &str = "en";

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec![DEFAULT_LOCALE.to_string()],
            default_locale: None,
            logging: LoggingConfig::default(),
        }
    }
}
