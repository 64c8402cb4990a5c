//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::error::ConfigResult;
use crate::loader::ConfigLoader;
use crate::schema::I18nConfig;
use arc_swap::ArcSwap;
use canopy_i18n::LocaleSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Thread-safe configuration cache using arc-swap for lock-free reads.
pub struct ConfigCache {
    config: ArcSwap<I18nConfig>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: I18nConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<I18nConfig> {
        self.config.load_full()
    }

    /// Updates the configuration atomically.
    ///
    /// Invalid configuration is rejected and the cached value is kept.
    pub fn update(&self, config: I18nConfig) -> ConfigResult<()> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Rejected configuration update");
            return Err(e);
        }
        self.config.store(Arc::new(config));
        Ok(())
    }

    /// Reloads the configuration from `loader` and swaps it in.
    pub fn reload(&self, loader: &ConfigLoader) -> ConfigResult<Arc<I18nConfig>> {
        let config = loader.load()?;
        self.update(config)?;
        info!(path = %loader.path().display(), "Configuration reloaded");
        Ok(self.get())
    }

    /// Locale set of the current configuration.
    pub fn locale_set(&self) -> ConfigResult<LocaleSet> {
        self.get().locale_set()
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(I18nConfig::default())
    }
}
