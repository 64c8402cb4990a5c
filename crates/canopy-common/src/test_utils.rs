//! Test utilities and shared test helpers for Canopy.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another subscriber may already be installed by the test binary
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Sample configuration documents in every supported format.
pub mod config_fixtures {
    /// Minimal TOML configuration with only the locale list.
    pub fn minimal_config_toml() -> &'static str {
        r#"
locales = ["ja", "en"]
"#
    }

    /// Full TOML configuration.
    pub fn full_config_toml() -> &'static str {
        r#"
locales = ["en", "ja", "zh"]
default_locale = "ja"

[logging]
level = "debug"
json_format = true
"#
    }

    /// Full YAML configuration.
    pub fn full_config_yaml() -> &'static str {
        r#"
locales:
  - en
  - ja
  - zh
default_locale: ja
logging:
  level: debug
  json_format: true
"#
    }

    /// Full JSON configuration.
    pub fn full_config_json() -> &'static str {
        r#"{
  "locales": ["en", "ja", "zh"],
  "default_locale": "ja",
  "logging": { "level": "debug", "json_format": true }
}"#
    }
}

/// Property testing strategies for locale identifiers.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy producing well-formed language identifiers such as `en` or `pt-BR`.
    pub fn locale_strategy() -> impl Strategy<Value = String> {
        "[a-z]{2,3}(-[A-Z]{2})?"
    }

    /// Strategy producing non-empty lists of distinct locales.
    pub fn locale_list_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set(locale_strategy(), 1..=max.max(1))
            .prop_map(|locales| locales.into_iter().collect())
    }
}
