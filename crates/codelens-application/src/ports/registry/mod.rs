//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses `linkme` distributed slices for compile-time registration of
//! providers that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(ENTRIES)]    │
//! │                         static X: Entry = Entry { ... };        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                         pub static ENTRIES: [Entry] = [..];     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  ENTRIES.iter()                           │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = ollama" → OllamaProvider     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in codelens-providers)
//!
//! ```ignore
//! use codelens_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "ollama",
//!     description: "Ollama local embedding provider",
//!     factory: |config| Ok(Arc::new(OllamaProvider::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in codelens-infrastructure)
//!
//! ```ignore
//! use codelens_application::ports::registry::resolve_embedding_provider;
//!
//! let config = EmbeddingProviderConfig { provider: "ollama".into(), .. };
//! let provider = resolve_embedding_provider(&config)?;
//! ```

pub mod cache;
pub mod embedding;
pub mod language;
pub mod vector_store;

// Re-export all registry types and functions
pub use cache::{
    list_cache_providers, resolve_cache_provider, CacheProviderConfig, CacheProviderEntry,
    CACHE_PROVIDERS,
};
pub use embedding::{
    list_embedding_providers, resolve_embedding_provider, EmbeddingProviderConfig,
    EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};
pub use language::{
    list_language_providers, resolve_language_provider, LanguageProviderConfig,
    LanguageProviderEntry, LANGUAGE_PROVIDERS,
};
pub use vector_store::{
    list_vector_store_providers, resolve_vector_store_provider, VectorStoreProviderConfig,
    VectorStoreProviderEntry, VECTOR_STORE_PROVIDERS,
};
