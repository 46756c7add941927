use codelens_domain::entities::{ChunkKind, ChunkMeta, CodeChunk, SymbolType};
use codelens_domain::value_objects::{Filter, FilterGroup, FilterOp, FilterValue};
use codelens_providers::vector_store::{
    FilesystemVectorStore, FilesystemVectorStoreConfig, InMemoryVectorStoreProvider,
};
use codelens_providers::VectorStoreProvider;

fn sample_chunk(id: &str, file_path: &str, symbol_type: SymbolType, is_exported: bool) -> CodeChunk {
    CodeChunk {
        id: id.to_string(),
        content: format!("fn {id}(){{}}"),
        content_raw: format!("fn {id}(){{}}"),
        hash: "deadbeef".to_string(),
        file_path: file_path.to_string(),
        start_line: 1,
        end_line: 2,
        chunk_index: 0,
        chunk_type: ChunkKind::Code,
        language: "rust".to_string(),
        meta: ChunkMeta {
            symbol_name: Some(id.to_string()),
            symbol_type: Some(symbol_type),
            is_exported,
            ..ChunkMeta::bare("rust".to_string())
        },
    }
}

#[tokio::test]
async fn in_memory_round_trips_documents() {
    let store = InMemoryVectorStoreProvider::new();
    store.open_or_create("proj", 3).await.unwrap();

    let chunk = sample_chunk("a.rs:0", "a.rs", SymbolType::Function, true);
    store
        .add_documents("proj", &[chunk.clone()], &[vec![1.0, 0.0, 0.0]])
        .await
        .unwrap();

    let results = store
        .search_by_vector("proj", &[1.0, 0.0, 0.0], &FilterGroup::empty(), 5)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a.rs:0");
    assert!(results[0].score.unwrap() > 0.99);
}

#[tokio::test]
async fn in_memory_dimension_mismatch_is_an_error() {
    let store = InMemoryVectorStoreProvider::new();
    store.open_or_create("proj", 3).await.unwrap();
    assert!(store.open_or_create("proj", 4).await.is_err());
}

#[tokio::test]
async fn in_memory_filter_restricts_results() {
    let store = InMemoryVectorStoreProvider::new();
    store.open_or_create("proj", 2).await.unwrap();

    let exported = sample_chunk("a.rs:0", "a.rs", SymbolType::Function, true);
    let hidden = sample_chunk("b.rs:0", "b.rs", SymbolType::Function, false);
    store
        .add_documents(
            "proj",
            &[exported, hidden],
            &[vec![1.0, 0.0], vec![1.0, 0.0]],
        )
        .await
        .unwrap();

    let group = FilterGroup {
        all: vec![Filter {
            key: "isExported".to_string(),
            op: FilterOp::Equals,
            value: FilterValue::Bool(true),
        }],
        ..Default::default()
    };

    let results = store
        .search_by_vector("proj", &[1.0, 0.0], &group, 10)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a.rs:0");
}

#[tokio::test]
async fn in_memory_delete_by_file_removes_all_its_chunks() {
    let store = InMemoryVectorStoreProvider::new();
    store.open_or_create("proj", 2).await.unwrap();

    let c0 = sample_chunk("a.rs:0", "a.rs", SymbolType::Function, true);
    let c1 = sample_chunk("a.rs:1", "a.rs", SymbolType::Method, true);
    store
        .add_documents("proj", &[c0, c1], &[vec![1.0, 0.0], vec![0.0, 1.0]])
        .await
        .unwrap();

    store.delete_by_file("proj", "a.rs").await.unwrap();

    let remaining = store
        .list("proj", &FilterGroup::empty(), 10)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn filesystem_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let config = FilesystemVectorStoreConfig {
        base_path: dir.path().to_path_buf(),
    };

    {
        let store = FilesystemVectorStore::new(config.clone()).await.unwrap();
        store.open_or_create("proj", 2).await.unwrap();
        let chunk = sample_chunk("a.rs:0", "a.rs", SymbolType::Function, true);
        store
            .add_documents("proj", &[chunk], &[vec![1.0, 0.0]])
            .await
            .unwrap();
    }

    let reopened = FilesystemVectorStore::new(config).await.unwrap();
    let results = reopened
        .list("proj", &FilterGroup::empty(), 10)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file_path, "a.rs");
}

#[tokio::test]
async fn filesystem_store_tracks_most_recently_indexed_project() {
    let dir = tempfile::tempdir().unwrap();
    let config = FilesystemVectorStoreConfig {
        base_path: dir.path().to_path_buf(),
    };
    let store = FilesystemVectorStore::new(config).await.unwrap();

    store.open_or_create("older", 1).await.unwrap();
    store.open_or_create("newer", 1).await.unwrap();

    let most_recent = store.get_most_recent_indexed_project().await.unwrap();
    assert!(most_recent.is_some());
}
