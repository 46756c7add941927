//! Null vector store provider for testing
//!
//! Implements `VectorStoreProvider` with no-op operations: every write
//! succeeds and every read returns empty. Useful for unit testing and as a
//! dependency-injection default when no real provider is configured.

use async_trait::async_trait;
use codelens_domain::entities::CodeChunk;
use codelens_domain::error::Result;
use codelens_domain::ports::providers::{VectorStoreAdmin, VectorStoreBrowser, VectorStoreProvider};
use codelens_domain::value_objects::{CollectionInfo, FileInfo, FilterGroup, SearchResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// No-op vector store provider for testing and DI defaults.
#[derive(Debug, Default, shaku::Component)]
#[shaku(interface = VectorStoreProvider)]
pub struct NullVectorStoreProvider {}

impl NullVectorStoreProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStoreAdmin for NullVectorStoreProvider {
    async fn has_collection(&self, _name: &str) -> Result<bool> {
        Ok(false)
    }

    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>> {
        let mut stats = HashMap::new();
        stats.insert("collection".to_string(), serde_json::json!(collection));
        stats.insert("vectors_count".to_string(), serde_json::json!(0));
        stats.insert("provider".to_string(), serde_json::json!(self.provider_name()));
        Ok(stats)
    }

    async fn delete_collection(&self, _name: &str) -> Result<()> {
        Ok(())
    }

    async fn flush(&self, _collection: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[async_trait]
impl VectorStoreProvider for NullVectorStoreProvider {
    async fn open_or_create(&self, _collection: &str, _expected_dim: usize) -> Result<()> {
        Ok(())
    }

    async fn add_documents(
        &self,
        _collection: &str,
        chunks: &[CodeChunk],
        _vectors: &[Vec<f32>],
    ) -> Result<Vec<String>> {
        Ok(chunks.iter().map(|c| c.id.clone()).collect())
    }

    async fn update_documents(
        &self,
        collection: &str,
        chunks: &[CodeChunk],
        vectors: &[Vec<f32>],
    ) -> Result<Vec<String>> {
        self.add_documents(collection, chunks, vectors).await
    }

    async fn delete_documents(&self, _collection: &str, _ids: &[String]) -> Result<()> {
        Ok(())
    }

    async fn delete_by_file(&self, _collection: &str, _path: &str) -> Result<()> {
        Ok(())
    }

    async fn search_by_vector(
        &self,
        _collection: &str,
        _vector: &[f32],
        _filters: &FilterGroup,
        _limit: usize,
    ) -> Result<Vec<SearchResult>> {
        Ok(Vec::new())
    }

    async fn list(
        &self,
        _collection: &str,
        _filters: &FilterGroup,
        _limit: usize,
    ) -> Result<Vec<SearchResult>> {
        Ok(Vec::new())
    }

    async fn get_most_recent_indexed_project(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

#[async_trait]
impl VectorStoreBrowser for NullVectorStoreProvider {
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        Ok(Vec::new())
    }

    async fn list_file_paths(&self, _collection: &str, _limit: usize) -> Result<Vec<FileInfo>> {
        Ok(Vec::new())
    }

    async fn get_chunks_by_file(
        &self,
        _collection: &str,
        _file_path: &str,
    ) -> Result<Vec<SearchResult>> {
        Ok(Vec::new())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use codelens_application::ports::registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

fn null_vector_store_factory(
    _config: &VectorStoreProviderConfig,
) -> std::result::Result<Arc<dyn VectorStoreProvider>, String> {
    Ok(Arc::new(NullVectorStoreProvider::new()))
}

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static NULL_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "null",
    description: "No-op vector store for testing",
    factory: null_vector_store_factory,
};
