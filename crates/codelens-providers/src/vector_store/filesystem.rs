//! Filesystem vector store implementation
//!
//! Persists each collection as a single JSON document under `base_path`,
//! cached in memory and rewritten wholesale on every mutation. Simple and
//! adequate for the per-project embedding tables this system deals with;
//! no sharding, no memory mapping.

use super::filter_eval::{StoredRow, cosine_similarity, matches};
use async_trait::async_trait;
use codelens_domain::entities::CodeChunk;
use codelens_domain::error::{Error, Result};
use codelens_domain::ports::providers::{VectorStoreAdmin, VectorStoreBrowser, VectorStoreProvider};
use codelens_domain::value_objects::{CollectionInfo, FileInfo, FilterGroup, SearchResult};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

/// Filesystem vector store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemVectorStoreConfig {
    /// Directory holding one `<collection>.json` file per collection.
    pub base_path: PathBuf,
}

impl Default for FilesystemVectorStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./data/vectors"),
        }
    }
}

/// On-disk representation of one collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CollectionFile {
    dimensions: usize,
    updated_at: Option<u64>,
    rows: HashMap<String, StoredRow>,
}

/// Filesystem-backed vector store: one JSON file per collection, cached in
/// memory and flushed wholesale after each mutating call.
pub struct FilesystemVectorStore {
    base_path: PathBuf,
    cache: Arc<DashMap<String, CollectionFile>>,
}

impl FilesystemVectorStore {
    pub async fn new(config: FilesystemVectorStoreConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.base_path)
            .await
            .map_err(|e| Error::io(format!("failed to create vector store directory: {e}")))?;
        Ok(Self {
            base_path: config.base_path,
            cache: Arc::new(DashMap::new()),
        })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.base_path.join(format!("{collection}.json"))
    }

    async fn load(&self, collection: &str) -> Result<Option<CollectionFile>> {
        if let Some(file) = self.cache.get(collection) {
            return Ok(Some(file.clone()));
        }
        let path = self.path_for(collection);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let file: CollectionFile = serde_json::from_str(&content).map_err(|e| {
                    Error::internal(format!("corrupt collection file '{collection}': {e}"))
                })?;
                self.cache.insert(collection.to_string(), file.clone());
                Ok(Some(file))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(format!("failed to read collection '{collection}': {e}"))),
        }
    }

    async fn save(&self, collection: &str, file: CollectionFile) -> Result<()> {
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| Error::internal(format!("failed to serialize collection: {e}")))?;
        tokio::fs::write(self.path_for(collection), content)
            .await
            .map_err(|e| Error::io(format!("failed to write collection '{collection}': {e}")))?;
        self.cache.insert(collection.to_string(), file);
        Ok(())
    }

    fn now_secs() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

#[async_trait]
impl VectorStoreAdmin for FilesystemVectorStore {
    async fn has_collection(&self, name: &str) -> Result<bool> {
        Ok(self.load(name).await?.is_some())
    }

    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>> {
        let file = self.load(collection).await?.unwrap_or_default();
        let mut stats = HashMap::new();
        stats.insert("collection".to_string(), serde_json::json!(collection));
        stats.insert("vectors_count".to_string(), serde_json::json!(file.rows.len()));
        stats.insert("dimensions".to_string(), serde_json::json!(file.dimensions));
        stats.insert("provider".to_string(), serde_json::json!(self.provider_name()));
        Ok(stats)
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        self.cache.remove(name);
        match tokio::fs::remove_file(self.path_for(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(format!("failed to delete collection '{name}': {e}"))),
        }
    }

    async fn flush(&self, collection: &str) -> Result<()> {
        if let Some(file) = self.cache.get(collection) {
            let file = file.clone();
            self.save(collection, file).await?;
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

#[async_trait]
impl VectorStoreProvider for FilesystemVectorStore {
    async fn open_or_create(&self, collection: &str, expected_dim: usize) -> Result<()> {
        match self.load(collection).await? {
            Some(file) => {
                if file.dimensions != expected_dim {
                    return Err(Error::dimension_mismatch(file.dimensions, expected_dim));
                }
                Ok(())
            }
            None => {
                self.save(
                    collection,
                    CollectionFile {
                        dimensions: expected_dim,
                        updated_at: Some(Self::now_secs()),
                        rows: HashMap::new(),
                    },
                )
                .await
            }
        }
    }

    async fn add_documents(
        &self,
        collection: &str,
        chunks: &[CodeChunk],
        vectors: &[Vec<f32>],
    ) -> Result<Vec<String>> {
        let mut file = self.load(collection).await?.ok_or_else(|| {
            Error::vector_db(format!("collection '{collection}' not found"))
        })?;

        let mut ids = Vec::with_capacity(chunks.len());
        for (chunk, vector) in chunks.iter().zip(vectors.iter()) {
            file.rows.insert(
                chunk.id.clone(),
                StoredRow::new(chunk.clone(), vector.clone()),
            );
            ids.push(chunk.id.clone());
        }
        file.updated_at = Some(Self::now_secs());
        self.save(collection, file).await?;
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
        let Some(mut file) = self.load(collection).await? else {
            return Ok(());
        };
        for id in ids {
            file.rows.remove(id);
        }
        file.updated_at = Some(Self::now_secs());
        self.save(collection, file).await
    }

    async fn delete_by_file(&self, collection: &str, path: &str) -> Result<()> {
        let Some(mut file) = self.load(collection).await? else {
            return Ok(());
        };
        file.rows.retain(|_, row| row.chunk.file_path != path);
        file.updated_at = Some(Self::now_secs());
        self.save(collection, file).await
    }

    async fn search_by_vector(
        &self,
        collection: &str,
        vector: &[f32],
        filters: &FilterGroup,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let Some(file) = self.load(collection).await? else {
            return Ok(Vec::new());
        };

        let mut heap: BinaryHeap<ScoredId> = BinaryHeap::with_capacity(limit + 1);
        for row in file.rows.values() {
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
            .filter_map(|s| file.rows.get(&s.id).map(|row| (row.clone(), s.score as f64)))
            .map(|(row, score)| row.into_search_result(Some(score)))
            .collect())
    }

    async fn list(
        &self,
        collection: &str,
        filters: &FilterGroup,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let Some(file) = self.load(collection).await? else {
            return Ok(Vec::new());
        };

        Ok(file
            .rows
            .values()
            .filter(|row| matches(&row.chunk, filters))
            .take(limit)
            .cloned()
            .map(|row| row.into_search_result(None))
            .collect())
    }

    async fn get_most_recent_indexed_project(&self) -> Result<Option<String>> {
        let mut entries = tokio::fs::read_dir(&self.base_path)
            .await
            .map_err(|e| Error::io(format!("failed to read vector store directory: {e}")))?;

        let mut best: Option<(u64, String)> = None;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(format!("failed to read directory entry: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(file) = self.load(name).await? {
                if let Some(updated_at) = file.updated_at {
                    if best.as_ref().is_none_or(|(best_ts, _)| updated_at > *best_ts) {
                        best = Some((updated_at, name.to_string()));
                    }
                }
            }
        }
        Ok(best.map(|(_, name)| name))
    }
}

#[async_trait]
impl VectorStoreBrowser for FilesystemVectorStore {
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        let mut entries = tokio::fs::read_dir(&self.base_path)
            .await
            .map_err(|e| Error::io(format!("failed to read vector store directory: {e}")))?;

        let mut collections = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(format!("failed to read directory entry: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(file) = self.load(name).await? {
                let file_count = file
                    .rows
                    .values()
                    .map(|r| r.chunk.file_path.as_str())
                    .collect::<HashSet<_>>()
                    .len() as u64;
                collections.push(CollectionInfo::new(
                    name,
                    file.rows.len() as u64,
                    file_count,
                    file.updated_at,
                    self.provider_name(),
                ));
            }
        }
        Ok(collections)
    }

    async fn list_file_paths(&self, collection: &str, limit: usize) -> Result<Vec<FileInfo>> {
        let file = self.load(collection).await?.ok_or_else(|| {
            Error::vector_db(format!("collection '{collection}' not found"))
        })?;

        let mut file_map: HashMap<String, (u32, String)> = HashMap::new();
        for row in file.rows.values() {
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
        let file = self.load(collection).await?.ok_or_else(|| {
            Error::vector_db(format!("collection '{collection}' not found"))
        })?;

        let mut results: Vec<SearchResult> = file
            .rows
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

fn filesystem_factory(
    config: &VectorStoreProviderConfig,
) -> std::result::Result<Arc<dyn VectorStoreProvider>, String> {
    let base_path = config
        .uri
        .clone()
        .unwrap_or_else(|| "./data/vectors".to_string());

    let fs_config = FilesystemVectorStoreConfig {
        base_path: PathBuf::from(base_path),
    };

    tokio::task::block_in_place(|| {
        tokio::runtime::Handle::current().block_on(async { FilesystemVectorStore::new(fs_config).await })
    })
    .map(|store| Arc::new(store) as Arc<dyn VectorStoreProvider>)
    .map_err(|e| format!("failed to create filesystem vector store: {e}"))
}

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static FILESYSTEM_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "filesystem",
    description: "Filesystem-based vector store (persistent, JSON document per collection)",
    factory: filesystem_factory,
};
