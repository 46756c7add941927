//! Domain Layer - codelens
//!
//! Entities, value objects, ports, and domain events for hybrid semantic +
//! structural code search. Clean Architecture's innermost ring: nothing here
//! depends on the application, infrastructure, or provider crates.
//!
//! ## Modules
//!
//! - `entities::*`: identity-bearing records (`CodeChunk`, `IndexMeta`, `FileRecord`, …)
//! - `value_objects::*`: attribute-only records (`SearchResult`, `FilterGroup`, config sections, …)
//! - `ports::*`: traits the application layer depends on and providers implement
//! - `events::*`: indexing-progress event types and the publisher port
//! - `error`, `constants`: shared error type and tuned numeric defaults
//!
//! ## Dependencies
//!
//! This crate depends only on pure Rust libraries (serde, thiserror,
//! async-trait, shaku's `Interface` marker) — no I/O, no async runtime.

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use constants::*;
pub use error::{Error, Result};

pub use entities::{
    ChunkKind, ChunkMeta, CodeChunk, CollapsibleRegion, EmbeddingsKey, FileRecord, IndexMeta,
    RegionKind, SymbolType, SIDECAR_VERSION,
};
pub use events::{DomainEvent, EventPublisher, IndexPhase, SharedEventPublisher};
pub use ports::{
    CacheEntryConfig, CacheProvider, CacheProviderFactoryInterface, CacheStats, VectorStoreAdmin,
    VectorStoreBrowser, VectorStoreProvider,
};
pub use value_objects::{
    CacheConfig, CollectionInfo, Embedding, EmbeddingConfig, FileInfo, Filter, FilterGroup,
    FilterOp, FilterValue, IndexingConfig, Language, LogFormat, LoggingConfig, OperationType,
    SearchResult, VectorStoreConfig, WatcherConfig,
};
