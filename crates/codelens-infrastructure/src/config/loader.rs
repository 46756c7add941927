//! Configuration loader
//!
//! Loads [`AppConfig`] by layering defaults, an optional `codelens.toml`, and
//! `CODELENS_*` environment variables through `figment`.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use codelens_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `CODELENS_INDEXING_CONCURRENCY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration (useful for hot-reloading)
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        validate_app_config(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate each configuration section in turn.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_indexing_config(config)?;
    validate_embeddings_config(config)?;
    validate_vector_store_config(config)?;
    validate_cache_config(config)?;
    validate_watcher_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn config_error(message: impl Into<String>) -> Error {
    Error::Configuration {
        message: message.into(),
        source: None,
    }
}

fn validate_indexing_config(config: &AppConfig) -> Result<()> {
    if config.indexing.concurrency == 0 {
        return Err(config_error("indexing.concurrency cannot be 0"));
    }
    if config.indexing.batch_size == 0 {
        return Err(config_error("indexing.batch_size cannot be 0"));
    }
    if config.indexing.max_file_size_bytes == 0 {
        return Err(config_error("indexing.max_file_size_bytes cannot be 0"));
    }
    Ok(())
}

fn validate_embeddings_config(config: &AppConfig) -> Result<()> {
    if config.embeddings.dimension == 0 {
        return Err(config_error("embeddings.dimension cannot be 0"));
    }
    if config.embeddings.model.trim().is_empty() {
        return Err(config_error("embeddings.model cannot be empty"));
    }
    Ok(())
}

fn validate_vector_store_config(config: &AppConfig) -> Result<()> {
    if config.vector_store.data_dir.trim().is_empty() {
        return Err(config_error("vector_store.data_dir cannot be empty"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.max_entries == 0 {
        return Err(config_error("cache.max_entries cannot be 0"));
    }
    Ok(())
}

fn validate_watcher_config(config: &AppConfig) -> Result<()> {
    if config.watcher.enabled && config.watcher.max_consecutive_errors == 0 {
        return Err(config_error(
            "watcher.max_consecutive_errors cannot be 0 when the watcher is enabled",
        ));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    crate::logging::parse_log_level(&config.logging.level)?;
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set the indexing section
    pub fn with_indexing(mut self, indexing: codelens_domain::value_objects::IndexingConfig) -> Self {
        self.config.indexing = indexing;
        self
    }

    /// Set the embeddings section
    pub fn with_embeddings(mut self, embeddings: codelens_domain::value_objects::EmbeddingConfig) -> Self {
        self.config.embeddings = embeddings;
        self
    }

    /// Set the vector store section
    pub fn with_vector_store(
        mut self,
        vector_store: codelens_domain::value_objects::VectorStoreConfig,
    ) -> Self {
        self.config.vector_store = vector_store;
        self
    }

    /// Set the cache section
    pub fn with_cache(mut self, cache: codelens_domain::value_objects::CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set the watcher section
    pub fn with_watcher(mut self, watcher: codelens_domain::value_objects::WatcherConfig) -> Self {
        self.config.watcher = watcher;
        self
    }

    /// Set the logging section
    pub fn with_logging(mut self, logging: codelens_domain::value_objects::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        validate_app_config(&AppConfig::default()).unwrap();
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let mut config = AppConfig::default();
        config.indexing.concurrency = 0;
        assert!(validate_app_config(&config).is_err());
    }

    #[test]
    fn builder_overrides_individual_sections() {
        let mut watcher = codelens_domain::value_objects::WatcherConfig::default();
        watcher.enabled = false;
        let config = ConfigBuilder::new().with_watcher(watcher).build();
        assert!(!config.watcher.enabled);
    }
}
