//! External Provider Ports
//!
//! Ports for external services the domain depends on but does not implement.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`VectorStoreAdmin`] | Collection lifecycle and health |
//! | [`VectorStoreProvider`] | Vector storage, similarity search, structural filtering |
//! | [`VectorStoreBrowser`] | Collection and file browsing |
//! | [`CacheProvider`] | Optional metadata/result caching backend |

/// Cache provider port
pub mod cache;
/// Vector store provider port
pub mod vector_store;

pub use cache::{CacheEntryConfig, CacheProvider, CacheProviderFactoryInterface, CacheStats};
pub use vector_store::{VectorStoreAdmin, VectorStoreBrowser, VectorStoreProvider};
