//! Configuration value objects
//!
//! Plain, validated settings structs. Layering (defaults → TOML → env) and
//! section-by-section validation live in `codelens-infrastructure`; these
//! types only carry the resolved shape and the per-field defaults.

use crate::value_objects::types::{CacheProviderKind, EmbeddingProviderKind, VectorStoreProviderKind};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// `[indexing]` section: concurrency, batching, and file-selection knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingConfig {
    /// Concurrent worker count for parse+embed
    pub concurrency: usize,
    /// Chunks per embedding batch
    pub batch_size: usize,
    /// Files larger than this are skipped entirely
    pub max_file_size_bytes: u64,
    /// Whether `.gitignore`-style rules are honored during enumeration
    pub respect_ignore_files: bool,
    /// Whether incremental mode is attempted before falling back to a full rebuild
    pub incremental: bool,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            concurrency: 8,
            batch_size: 256,
            max_file_size_bytes: 500 * 1024,
            respect_ignore_files: true,
            incremental: true,
        }
    }
}

/// `[embeddings]` section: which provider and model to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider backend
    pub provider: EmbeddingProviderKind,
    /// Model name/identifier, provider-specific
    pub model: String,
    /// Expected output dimensionality
    pub dimension: usize,
    /// Execution device, when the provider distinguishes one
    pub device: Option<String>,
    /// Remote endpoint URL, only consulted by `RemoteHttp`
    pub endpoint: Option<String>,
    /// Bearer token for the remote endpoint, only consulted by `RemoteHttp`
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::FastEmbed,
            model: "bge-small-en-v1.5".to_string(),
            dimension: 384,
            device: None,
            endpoint: None,
            api_key: None,
        }
    }
}

/// `[vector_store]` section: which backend and where its data lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Backend kind
    pub provider: VectorStoreProviderKind,
    /// Root data directory; backend-specific subdirectories are created beneath it
    pub data_dir: String,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: VectorStoreProviderKind::Filesystem,
            data_dir: ".codelens".to_string(),
        }
    }
}

/// `[cache]` section: optional metadata/result caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend kind
    pub provider: CacheProviderKind,
    /// Max resident entries, only consulted by `Moka`
    pub max_entries: u64,
    /// Entry time-to-live in seconds, only consulted by `Moka`
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: CacheProviderKind::Moka,
            max_entries: 10_000,
            ttl_secs: 300,
        }
    }
}

/// `[watcher]` section: debounce and backoff knobs for the filesystem watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// Whether the watcher is enabled at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Quiet period after the last filesystem event before reindexing, in milliseconds
    pub debounce_ms: u64,
    /// Fallback poll interval when native events are unavailable, in seconds
    pub poll_interval_secs: u64,
    /// Consecutive reindex failures tolerated before the watcher stops retrying
    pub max_consecutive_errors: u32,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: 500,
            poll_interval_secs: 60,
            max_consecutive_errors: 3,
        }
    }
}

/// Output format for the logging subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable text, for interactive terminals
    Text,
    /// Newline-delimited JSON, for log aggregation
    Json,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Directory rolling file logs are written to; `None` logs to stderr only
    pub file_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_defaults_match_documented_budgets() {
        let cfg = IndexingConfig::default();
        assert_eq!(cfg.concurrency, 8);
        assert_eq!(cfg.batch_size, 256);
        assert_eq!(cfg.max_file_size_bytes, 500 * 1024);
    }

    #[test]
    fn embedding_default_dimension_matches_default_model() {
        let cfg = EmbeddingConfig::default();
        assert_eq!(cfg.dimension, 384);
    }
}
