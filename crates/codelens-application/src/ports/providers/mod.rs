//! External Provider Ports
//!
//! Ports for external services and providers that the application layer
//! depends on but does not implement.
//!
//! Vector store and cache ports live in `codelens-domain` (the innermost
//! ring already needs them for the indexer and search use cases); embedding
//! and language chunking ports live here since only the application layer
//! orchestrates them.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text embedding generation services |
//! | [`VectorStoreProvider`] | Vector storage and similarity search |
//! | [`LanguageChunkingProvider`] | Language-specific code chunking |
//! | [`CacheProvider`] | Caching backend services |

/// Embedding provider port
pub mod embedding;
/// Language chunking provider port
pub mod language_chunking;

pub use codelens_domain::ports::providers::cache;
pub use codelens_domain::ports::providers::vector_store;

pub use codelens_domain::ports::providers::{
    CacheEntryConfig, CacheProvider, CacheProviderFactoryInterface, CacheStats, VectorStoreAdmin,
    VectorStoreProvider,
};
pub use embedding::EmbeddingProvider;
pub use language_chunking::LanguageChunkingProvider;
