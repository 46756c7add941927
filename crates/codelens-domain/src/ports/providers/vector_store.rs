//! Vector Store Provider Port
//!
//! Persistent table of `(id, vector, content, content_raw, scalar fields…)`
//! per project, stored under `<data-dir>/<project-hash>/`. Backends insert,
//! delete, and run vector kNN with scalar predicate pushdown; they never read
//! the sidecar.

use crate::entities::CodeChunk;
use crate::error::Result;
use crate::value_objects::{CollectionInfo, FileInfo, FilterGroup, SearchResult};
use async_trait::async_trait;
use serde_json::Value;
use shaku::Interface;
use std::collections::HashMap;

/// Administrative and monitoring operations, kept separate from
/// [`VectorStoreProvider`] so trait objects that only need health/stats don't
/// have to implement the full read/write surface.
#[async_trait]
pub trait VectorStoreAdmin: Interface + Send + Sync {
    /// Whether a collection has been created.
    async fn has_collection(&self, name: &str) -> Result<bool>;

    /// Row count and other backend statistics for a collection.
    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>>;

    /// Permanently remove a collection and all its data.
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Flush pending writes for a collection.
    async fn flush(&self, collection: &str) -> Result<()>;

    /// Identifier of this backend (`"memory"`, `"filesystem"`).
    fn provider_name(&self) -> &str;

    /// Cheap liveness check; default implementation probes collection existence.
    async fn health_check(&self) -> Result<()> {
        self.has_collection("__health_check__").await?;
        Ok(())
    }
}

/// Core vector storage and structural-filtered similarity search contract.
///
/// `dimensions` is fixed per collection at creation time; every subsequent
/// insert or search with a mismatched vector length is a hard error, not a
/// silent truncation/pad.
#[async_trait]
pub trait VectorStoreProvider: VectorStoreAdmin + Send + Sync {
    /// Open an existing collection or create one with `expected_dim`,
    /// writing a sentinel row so an empty-but-created collection is
    /// distinguishable from one that was never created.
    ///
    /// If the collection already exists with a different dimension, returns
    /// [`crate::error::Error::DimensionMismatch`] — the caller must trigger a
    /// full reindex rather than silently reinterpreting vectors.
    async fn open_or_create(&self, collection: &str, expected_dim: usize) -> Result<()>;

    /// Append rows for `chunks`. Embedding is the caller's responsibility;
    /// `vectors[i]` corresponds to `chunks[i]`.
    async fn add_documents(
        &self,
        collection: &str,
        chunks: &[CodeChunk],
        vectors: &[Vec<f32>],
    ) -> Result<Vec<String>>;

    /// Delete-by-id then add; used when a chunk's content changed but its
    /// identity (`file_path:chunk_index`) did not.
    async fn update_documents(
        &self,
        collection: &str,
        chunks: &[CodeChunk],
        vectors: &[Vec<f32>],
    ) -> Result<Vec<String>>;

    /// Delete rows by id, chunked internally at
    /// [`crate::constants::VECTOR_STORE_DELETE_BATCH_SIZE`] ids per batch.
    async fn delete_documents(&self, collection: &str, ids: &[String]) -> Result<()>;

    /// Delete every row whose `file` column equals `path`.
    async fn delete_by_file(&self, collection: &str, path: &str) -> Result<()>;

    /// Vector kNN restricted by `filters`, returning rows with their distance
    /// converted to `score` (`1 - distance`).
    async fn search_by_vector(
        &self,
        collection: &str,
        vector: &[f32],
        filters: &FilterGroup,
        limit: usize,
    ) -> Result<Vec<SearchResult>>;

    /// Predicate-only scan with no vector component, for duplicate-detector
    /// candidate listing and admin browsing.
    async fn list(
        &self,
        collection: &str,
        filters: &FilterGroup,
        limit: usize,
    ) -> Result<Vec<SearchResult>>;

    /// Scan every sidecar this store's data directory knows about and return
    /// the project root with the most recent `updated_at`, if any.
    async fn get_most_recent_indexed_project(&self) -> Result<Option<String>>;
}

/// Collection and file browsing, split out from [`VectorStoreProvider`]
/// because it only matters to interactive/admin consumers.
#[async_trait]
pub trait VectorStoreBrowser: Interface + Send + Sync {
    /// All collections with summary statistics.
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>>;

    /// Unique file paths indexed in a collection.
    async fn list_file_paths(&self, collection: &str, limit: usize) -> Result<Vec<FileInfo>>;

    /// All chunks extracted from one file, ordered by line number.
    async fn get_chunks_by_file(
        &self,
        collection: &str,
        file_path: &str,
    ) -> Result<Vec<SearchResult>>;
}
