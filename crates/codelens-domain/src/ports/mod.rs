//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outside world. High-level
//! code (domain, application) defines these interfaces; low-level code
//! (providers, infrastructure) implements them.
//!
//! ## Organization
//!
//! - **providers/** - external service provider ports (vector store, cache)

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{
    CacheEntryConfig, CacheProvider, CacheProviderFactoryInterface, CacheStats, VectorStoreAdmin,
    VectorStoreBrowser, VectorStoreProvider,
};
