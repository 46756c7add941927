//! Type definitions for dynamic domain concepts
//!
//! Small enums and aliases shared across entities and ports that don't
//! warrant their own module.

use serde::{Deserialize, Serialize};

/// Programming language identifier.
///
/// Kept as a plain string rather than a closed enum: language processors are
/// registered at compile time via plugin discovery, and the set of supported
/// languages grows without touching this type.
pub type Language = String;

/// Classification of an operation, for logging and rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    /// A full or incremental indexing run
    Index,
    /// A semantic/hybrid search query
    Search,
    /// A duplicate-detection scan
    DuplicateScan,
    /// A file-watcher triggered reindex
    Watch,
}

/// Which cache backend a [`crate::value_objects::CacheConfig`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheProviderKind {
    /// No caching
    None,
    /// In-process `moka` cache
    Moka,
}

/// Which embedding backend an [`crate::value_objects::EmbeddingConfig`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbeddingProviderKind {
    /// Local ONNX inference via `fastembed`
    FastEmbed,
    /// A remote HTTP embeddings endpoint
    RemoteHttp,
    /// A fixed zero-vector provider, for tests and offline dry runs
    Null,
}

/// Which vector store backend a [`crate::value_objects::VectorStoreConfig`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VectorStoreProviderKind {
    /// Process-local `DashMap`-backed store, lost on restart
    Memory,
    /// Sharded binary files with a JSON index, under the project data directory
    Filesystem,
}
