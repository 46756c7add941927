//! Sidecar entities — the per-project JSON snapshot of file fingerprints
//!
//! The Indexer is the sidecar's single writer; the vector store never reads
//! it. Writes are atomic (temp file + rename) and are performed by the
//! infrastructure layer's file utilities, not by these plain data types.

use crate::entities::region::CollapsibleRegion;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current sidecar schema version. Bump alongside any breaking field change.
pub const SIDECAR_VERSION: u32 = 1;

/// Per-file fingerprint record stored in the sidecar.
///
/// *Lifecycle:* created on first index; mutated only by the Indexer; removed
/// when the file disappears from the enumerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Project-relative path with `/` separators
    pub path: String,
    /// File size in bytes at last index time
    pub size: u64,
    /// Modification time in milliseconds since the Unix epoch
    pub mtime_ms: u64,
    /// SHA-1 of the full file content
    pub content_hash: String,
    /// SHA-1 of each chunk's `content`, in `chunk_index` order
    pub chunk_hashes: Vec<String>,
    /// Collapsible regions for this file, sorted by `start_line`
    pub collapsible_regions: Vec<CollapsibleRegion>,
}

/// The embeddings configuration tuple that forms the index's compatibility
/// key: any change to `(provider, model, dimension)` forces a full rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingsKey {
    /// Embeddings provider identifier (`"fastembed"`, `"remote-http"`, …)
    pub provider: String,
    /// Model name/identifier reported by the provider
    pub model: String,
    /// Embedding vector dimensionality
    pub dimension: usize,
    /// Execution device, when the provider distinguishes one (`"cpu"`, `"cuda:0"`)
    pub device: Option<String>,
}

impl EmbeddingsKey {
    /// Whether this key is still valid for an index built under `other`.
    pub fn compatible_with(&self, other: &EmbeddingsKey) -> bool {
        self.provider == other.provider
            && self.model == other.model
            && self.dimension == other.dimension
    }
}

/// The sidecar itself: `index-meta.json` in the per-project data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexMeta {
    /// Sidecar schema version
    pub version: u32,
    /// Absolute project root this sidecar describes
    pub root: String,
    /// Compatibility key for the embeddings used to build this index
    pub embeddings: EmbeddingsKey,
    /// Per-file fingerprint records, keyed by relative path
    pub files: HashMap<String, FileRecord>,
    /// Unix timestamp (seconds) of the last successful write
    pub updated_at: u64,
}

impl IndexMeta {
    /// A fresh, empty sidecar for a newly created index.
    pub fn new(root: impl Into<String>, embeddings: EmbeddingsKey, updated_at: u64) -> Self {
        Self {
            version: SIDECAR_VERSION,
            root: root.into(),
            embeddings,
            files: HashMap::new(),
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_key_ignores_device() {
        let a = EmbeddingsKey {
            provider: "fastembed".into(),
            model: "bge-small".into(),
            dimension: 384,
            device: Some("cpu".into()),
        };
        let b = EmbeddingsKey {
            device: Some("cuda:0".into()),
            ..a.clone()
        };
        assert!(a.compatible_with(&b));
    }

    #[test]
    fn compatibility_key_trips_on_dimension_change() {
        let a = EmbeddingsKey {
            provider: "fastembed".into(),
            model: "bge-small".into(),
            dimension: 384,
            device: None,
        };
        let b = EmbeddingsKey {
            dimension: 768,
            ..a.clone()
        };
        assert!(!a.compatible_with(&b));
    }
}
