//! In-memory vector store provider implementation
//!
//! Stores chunks and vectors in memory behind a concurrent hash map. Data is
//! not persisted and is lost on restart; useful for development and tests.

use super::filter_eval::{StoredRow, cosine_similarity, matches};
use async_trait::async_trait;
use codelens_domain::entities::CodeChunk;
use codelens_domain::error::{Error, Result};
use codelens_domain::ports::providers::{VectorStoreAdmin, VectorStoreBrowser, VectorStoreProvider};
use codelens_domain::value_objects::{CollectionInfo, FileInfo, FilterGroup, SearchResult};
use dashmap::DashMap;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

/// In-memory vector store provider.
///
/// Rows are keyed by `(collection, id)`; `dimensions` pins the expected
/// vector length per collection once `open_or_create` has run.
pub struct InMemoryVectorStoreProvider {
    collections: Arc<DashMap<String, HashMap<String, StoredRow>>>,
    dimensions: Arc<DashMap<String, usize>>,
}

impl InMemoryVectorStoreProvider {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
            dimensions: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryVectorStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreAdmin for InMemoryVectorStoreProvider {
    async fn has_collection(&self, name: &str) -> Result<bool> {
        Ok(self.collections.contains_key(name))
    }

    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>> {
        let count = self
            .collections
            .get(collection)
            .map(|rows| rows.len())
            .unwrap_or(0);

        let mut stats = HashMap::new();
        stats.insert("collection".to_string(), serde_json::json!(collection));
        stats.insert("vectors_count".to_string(), serde_json::json!(count));
        stats.insert(
            "provider".to_string(),
            serde_json::json!(self.provider_name()),
        );
        Ok(stats)
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        self.collections.remove(name);
        self.dimensions.remove(name);
        Ok(())
    }

    async fn flush(&self, _collection: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn open_or_create(&self, collection: &str, expected_dim: usize) -> Result<()> {
        if let Some(existing) = self.dimensions.get(collection) {
            if *existing != expected_dim {
                return Err(Error::dimension_mismatch(*existing, expected_dim));
            }
            return Ok(());
        }
        self.dimensions.insert(collection.to_string(), expected_dim);
        self.collections
            .entry(collection.to_string())
            .or_insert_with(HashMap::new);
        Ok(())
    }

    async fn add_documents(
        &self,
        collection: &str,
        chunks: &[CodeChunk],
        vectors: &[Vec<f32>],
    ) -> Result<Vec<String>> {
        let mut rows = self
            .collections
            .entry(collection.to_string())
            .or_insert_with(HashMap::new);

        let mut ids = Vec::with_capacity(chunks.len());
        for (chunk, vector) in chunks.iter().zip(vectors.iter()) {
            rows.insert(
                chunk.id.clone(),
                StoredRow::new(chunk.clone(), vector.clone()),
            );
            ids.push(chunk.id.clone());
        }
        Ok(ids)
    }

    async fn update_documents(
        &self,
        collection: &str,
        chunks: &[CodeChunk],
        vectors: &[Vec<f32>],
    ) -> Result<Vec<String>> {
        let ids: Vec<String> = chunks.iter().map(|c| c.id.clone()).collect();
        self.delete_documents(collection, &ids).await?;
        self.add_documents(collection, chunks, vectors).await
    }

    async fn delete_documents(&self, collection: &str, ids: &[String]) -> Result<()> {
        if let Some(mut rows) = self.collections.get_mut(collection) {
            for id in ids {
                rows.remove(id);
            }
        }
        Ok(())
    }

    async fn delete_by_file(&self, collection: &str, path: &str) -> Result<()> {
        if let Some(mut rows) = self.collections.get_mut(collection) {
            rows.retain(|_, row| row.chunk.file_path != path);
        }
        Ok(())
    }

    async fn search_by_vector(
        &self,
        collection: &str,
        vector: &[f32],
        filters: &FilterGroup,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let rows = match self.collections.get(collection) {
            Some(rows) => rows,
            None => return Ok(Vec::new()),
        };

        let mut heap: BinaryHeap<ScoredId> = BinaryHeap::with_capacity(limit + 1);
        for row in rows.values() {
            if !matches(&row.chunk, filters) {
                continue;
            }
            let score = cosine_similarity(vector, &row.vector);
            if heap.len() < limit.max(1) {
                heap.push(ScoredId {
                    score,
                    id: row.chunk.id.clone(),
                });
            } else if let Some(min) = heap.peek() {
                if score > min.score {
                    heap.pop();
                    heap.push(ScoredId {
                        score,
                        id: row.chunk.id.clone(),
                    });
                }
            }
        }

        let mut scored: Vec<ScoredId> = heap.into_iter().collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .filter_map(|s| rows.get(&s.id).map(|row| (row.clone(), s.score as f64)))
            .map(|(row, score)| row.into_search_result(Some(score)))
            .collect())
    }

    async fn list(
        &self,
        collection: &str,
        filters: &FilterGroup,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let rows = match self.collections.get(collection) {
            Some(rows) => rows,
            None => return Ok(Vec::new()),
        };

        Ok(rows
            .values()
            .filter(|row| matches(&row.chunk, filters))
            .take(limit)
            .cloned()
            .map(|row| row.into_search_result(None))
            .collect())
    }

    async fn get_most_recent_indexed_project(&self) -> Result<Option<String>> {
        // Nothing persists across restarts, so there's no project history to scan.
        Ok(None)
    }
}

#[async_trait]
impl VectorStoreBrowser for InMemoryVectorStoreProvider {
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        Ok(self
            .collections
            .iter()
            .map(|entry| {
                let name = entry.key().clone();
                let rows = entry.value();
                let vector_count = rows.len() as u64;
                let file_count = rows
                    .values()
                    .map(|r| r.chunk.file_path.as_str())
                    .collect::<HashSet<_>>()
                    .len() as u64;
                CollectionInfo::new(name, vector_count, file_count, None, self.provider_name())
            })
            .collect())
    }

    async fn list_file_paths(&self, collection: &str, limit: usize) -> Result<Vec<FileInfo>> {
        let rows = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::vector_db(format!("Collection '{}' not found", collection)))?;

        let mut file_map: HashMap<String, (u32, String)> = HashMap::new();
        for row in rows.values() {
            let entry = file_map
                .entry(row.chunk.file_path.clone())
                .or_insert((0, row.chunk.language.clone()));
            entry.0 += 1;
        }

        Ok(file_map
            .into_iter()
            .take(limit)
            .map(|(path, (chunk_count, language))| FileInfo::new(path, chunk_count, language, None))
            .collect())
    }

    async fn get_chunks_by_file(
        &self,
        collection: &str,
        file_path: &str,
    ) -> Result<Vec<SearchResult>> {
        let rows = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::vector_db(format!("Collection '{}' not found", collection)))?;

        let mut results: Vec<SearchResult> = rows
            .values()
            .filter(|row| row.chunk.file_path == file_path)
            .cloned()
            .map(|row| row.into_search_result(None))
            .collect();

        results.sort_by_key(|r| r.start_line);
        Ok(results)
    }
}

/// Entry in the top-k min-heap used by `search_by_vector`.
#[derive(PartialEq)]
struct ScoredId {
    score: f32,
    id: String,
}

impl Eq for ScoredId {}

impl Ord for ScoredId {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.partial_cmp(&self.score).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ScoredId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use codelens_application::ports::registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

fn in_memory_vector_store_factory(
    _config: &VectorStoreProviderConfig,
) -> std::result::Result<Arc<dyn VectorStoreProvider>, String> {
    Ok(Arc::new(InMemoryVectorStoreProvider::new()))
}

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static MEMORY_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "memory",
    description: "In-memory vector store (fast, non-persistent)",
    factory: in_memory_vector_store_factory,
};
