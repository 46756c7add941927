//! Unit tests for domain type definitions

use codelens_domain::value_objects::types::{
    CacheProviderKind, EmbeddingProviderKind, VectorStoreProviderKind,
};
use codelens_domain::{Language, OperationType};

#[test]
fn language_is_a_plain_string_alias() {
    let lang: Language = "rust".to_string();
    assert_eq!(lang, "rust");

    let custom: Language = "zig".to_string();
    assert_eq!(custom, "zig");
}

#[test]
fn operation_type_variants_are_distinct() {
    assert_ne!(OperationType::Index, OperationType::Search);
    assert_ne!(OperationType::Search, OperationType::DuplicateScan);
    assert_ne!(OperationType::DuplicateScan, OperationType::Watch);
    assert_eq!(OperationType::Index, OperationType::Index);
}

#[test]
fn operation_type_serializes_snake_case() {
    let json = serde_json::to_string(&OperationType::DuplicateScan).unwrap();
    assert_eq!(json, "\"duplicate_scan\"");
}

#[test]
fn cache_provider_kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&CacheProviderKind::Moka).unwrap(),
        "\"moka\""
    );
    assert_eq!(
        serde_json::to_string(&CacheProviderKind::None).unwrap(),
        "\"none\""
    );
}

#[test]
fn embedding_provider_kind_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&EmbeddingProviderKind::FastEmbed).unwrap(),
        "\"fast-embed\""
    );
    assert_eq!(
        serde_json::to_string(&EmbeddingProviderKind::RemoteHttp).unwrap(),
        "\"remote-http\""
    );
    assert_eq!(
        serde_json::to_string(&EmbeddingProviderKind::Null).unwrap(),
        "\"null\""
    );
}

#[test]
fn vector_store_provider_kind_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&VectorStoreProviderKind::Memory).unwrap(),
        "\"memory\""
    );
    assert_eq!(
        serde_json::to_string(&VectorStoreProviderKind::Filesystem).unwrap(),
        "\"filesystem\""
    );
}

#[test]
fn provider_kinds_round_trip_through_json() {
    for kind in [
        EmbeddingProviderKind::FastEmbed,
        EmbeddingProviderKind::RemoteHttp,
        EmbeddingProviderKind::Null,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        let back: EmbeddingProviderKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
