//! Unit tests for configuration value objects

use codelens_domain::value_objects::config::LogFormat;
use codelens_domain::value_objects::types::{
    CacheProviderKind, EmbeddingProviderKind, VectorStoreProviderKind,
};
use codelens_domain::{
    CacheConfig, EmbeddingConfig, IndexingConfig, LoggingConfig, VectorStoreConfig, WatcherConfig,
};

#[test]
fn indexing_config_defaults() {
    let config = IndexingConfig::default();
    assert_eq!(config.concurrency, 8);
    assert_eq!(config.batch_size, 256);
    assert_eq!(config.max_file_size_bytes, 500 * 1024);
    assert!(config.respect_ignore_files);
    assert!(config.incremental);
}

#[test]
fn embedding_config_defaults_to_fastembed() {
    let config = EmbeddingConfig::default();
    assert_eq!(config.provider, EmbeddingProviderKind::FastEmbed);
    assert_eq!(config.model, "bge-small-en-v1.5");
    assert_eq!(config.dimension, 384);
    assert_eq!(config.endpoint, None);
    assert_eq!(config.api_key, None);
}

#[test]
fn embedding_config_remote_http_variant() {
    let config = EmbeddingConfig {
        provider: EmbeddingProviderKind::RemoteHttp,
        model: "text-embedding-3-small".to_string(),
        dimension: 1536,
        device: None,
        endpoint: Some("https://api.example.com/embeddings".to_string()),
        api_key: Some("sk-test".to_string()),
    };

    assert_eq!(config.provider, EmbeddingProviderKind::RemoteHttp);
    assert_eq!(config.dimension, 1536);
    assert!(config.endpoint.is_some());
}

#[test]
fn vector_store_config_defaults_to_filesystem() {
    let config = VectorStoreConfig::default();
    assert_eq!(config.provider, VectorStoreProviderKind::Filesystem);
    assert_eq!(config.data_dir, ".codelens");
}

#[test]
fn vector_store_config_memory_variant() {
    let config = VectorStoreConfig {
        provider: VectorStoreProviderKind::Memory,
        data_dir: ".codelens".to_string(),
    };
    assert_eq!(config.provider, VectorStoreProviderKind::Memory);
}

#[test]
fn cache_config_defaults_to_moka() {
    let config = CacheConfig::default();
    assert_eq!(config.provider, CacheProviderKind::Moka);
    assert_eq!(config.max_entries, 10_000);
    assert_eq!(config.ttl_secs, 300);
}

#[test]
fn cache_config_none_variant_disables_caching() {
    let config = CacheConfig {
        provider: CacheProviderKind::None,
        ..CacheConfig::default()
    };
    assert_eq!(config.provider, CacheProviderKind::None);
}

#[test]
fn watcher_config_defaults() {
    let config = WatcherConfig::default();
    assert!(config.enabled);
    assert_eq!(config.debounce_ms, 500);
    assert_eq!(config.poll_interval_secs, 60);
    assert_eq!(config.max_consecutive_errors, 3);
}

#[test]
fn logging_config_defaults_to_text() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Text);
    assert_eq!(config.file_dir, None);
}

#[test]
fn logging_config_json_format_for_aggregation() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        file_dir: Some("/var/log/codelens".to_string()),
    };
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.file_dir.is_some());
}

#[test]
fn config_values_round_trip_through_json() {
    let config = EmbeddingConfig::default();
    let json = serde_json::to_string(&config).expect("serialization should succeed");
    let deserialized: EmbeddingConfig =
        serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(config, deserialized);
}
