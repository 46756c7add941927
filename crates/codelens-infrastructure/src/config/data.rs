//! Composed application configuration
//!
//! `AppConfig` aggregates the five config sections `codelens-domain` defines
//! (each already `#[serde(default)]` with its own per-field defaults) into the
//! single shape `ConfigLoader` extracts from the layered Figment profile.

use codelens_domain::value_objects::{
    CacheConfig, EmbeddingConfig, IndexingConfig, LoggingConfig, VectorStoreConfig, WatcherConfig,
};
use serde::{Deserialize, Serialize};

/// Top-level configuration, one field per `codelens.toml` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `[indexing]`
    pub indexing: IndexingConfig,
    /// `[embeddings]`
    pub embeddings: EmbeddingConfig,
    /// `[vector_store]`
    pub vector_store: VectorStoreConfig,
    /// `[cache]`
    pub cache: CacheConfig,
    /// `[watcher]`
    pub watcher: WatcherConfig,
    /// `[logging]`
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(cfg, parsed);
    }
}
