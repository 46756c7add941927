//! Integration test suite for codelens-domain
//!
//! Exercises entities and value objects together the way the application
//! layer composes them, rather than each type in isolation.
//!
//! Run with: `cargo test -p codelens-domain --test integration`

use codelens_domain::entities::{ChunkKind, ChunkMeta, CodeChunk, EmbeddingsKey, IndexMeta, SymbolType};
use codelens_domain::value_objects::{Filter, FilterGroup, FilterOp, FilterValue, SearchResult};

fn sample_chunk() -> CodeChunk {
    CodeChunk {
        id: CodeChunk::make_id("src/search.rs", 2),
        content: "// File: src/search.rs\npub fn search(query: &str) -> Vec<SearchResult> { todo!() }"
            .to_string(),
        content_raw: "pub fn search(query: &str) -> Vec<SearchResult> { todo!() }".to_string(),
        hash: "abc123".to_string(),
        file_path: "src/search.rs".to_string(),
        start_line: 40,
        end_line: 42,
        chunk_index: 2,
        chunk_type: ChunkKind::Code,
        language: "rust".to_string(),
        meta: ChunkMeta {
            symbol_name: Some("search".to_string()),
            symbol_type: Some(SymbolType::Function),
            is_exported: true,
            complexity: 3,
            ..ChunkMeta::bare("rust".to_string())
        },
    }
}

/// A vector store row carries the full scalar projection of the chunk it was
/// built from, so a search engine can build one without re-reading the file.
fn project_to_search_result(chunk: &CodeChunk, vector: Vec<f32>, score: Option<f64>) -> SearchResult {
    SearchResult {
        id: chunk.id.clone(),
        file_path: chunk.file_path.clone(),
        start_line: chunk.start_line,
        end_line: chunk.end_line,
        chunk_index: chunk.chunk_index,
        content: chunk.content.clone(),
        content_raw: chunk.content_raw.clone(),
        chunk_type: chunk.chunk_type,
        score,
        vector,
        language: chunk.language.clone(),
        symbol_name: chunk.meta.symbol_name.clone(),
        symbol_type: chunk.meta.symbol_type,
        complexity: chunk.meta.complexity,
        is_exported: chunk.meta.is_exported,
        parent_scope: chunk.meta.parent_scope.clone(),
    }
}

#[test]
fn chunk_projects_into_a_scored_search_result() {
    let chunk = sample_chunk();
    let result = project_to_search_result(&chunk, vec![0.1, 0.2, 0.3], Some(0.92));

    assert_eq!(result.id, "src/search.rs:2");
    assert_eq!(result.symbol_name.as_deref(), Some("search"));
    assert_eq!(result.symbol_type, Some(SymbolType::Function));
    assert_eq!(result.score, Some(0.92));
    assert!(result.is_exported);
}

#[test]
fn list_rows_carry_no_score() {
    let chunk = sample_chunk();
    let result = project_to_search_result(&chunk, vec![0.1, 0.2, 0.3], None);
    assert_eq!(result.score, None);
}

#[test]
fn duplicate_detector_reuses_vector_and_raw_content_from_the_row() {
    let chunk = sample_chunk();
    let result = project_to_search_result(&chunk, vec![0.4, 0.5, 0.6], Some(0.99));

    // The detector never re-reads the file: `vector` and `content_raw` must
    // already be present on the row it scans.
    assert_eq!(result.vector, vec![0.4, 0.5, 0.6]);
    assert_eq!(result.content_raw, chunk.content_raw);
}

#[test]
fn filter_group_restricts_search_to_exported_functions() {
    let group = FilterGroup {
        all: vec![
            Filter {
                key: "symbol_type".to_string(),
                op: FilterOp::Equals,
                value: FilterValue::String("function".to_string()),
            },
            Filter {
                key: "is_exported".to_string(),
                op: FilterOp::Equals,
                value: FilterValue::Bool(true),
            },
        ],
        any: vec![],
        none: vec![],
    };

    assert!(!group.is_empty());
    assert!(group.all.iter().all(Filter::is_safe));
}

#[test]
fn a_fresh_sidecar_has_no_file_records_yet() {
    let key = EmbeddingsKey {
        provider: "fastembed".to_string(),
        model: "bge-small-en-v1.5".to_string(),
        dimension: 384,
        device: None,
    };
    let sidecar = IndexMeta::new("/repo", key, 1_700_000_000);

    assert_eq!(sidecar.version, codelens_domain::entities::SIDECAR_VERSION);
    assert!(sidecar.files.is_empty());
}

#[test]
fn reindex_with_a_different_model_invalidates_the_sidecar() {
    let original = EmbeddingsKey {
        provider: "fastembed".to_string(),
        model: "bge-small-en-v1.5".to_string(),
        dimension: 384,
        device: None,
    };
    let reconfigured = EmbeddingsKey {
        model: "bge-base-en-v1.5".to_string(),
        dimension: 768,
        ..original.clone()
    };

    assert!(!original.compatible_with(&reconfigured));
}
