//! Cache Provider Implementations
//!
//! Provides caching backends for embedding and search result caching.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | No-op stub for testing |
//! | [`MokaCacheProvider`] | Local | In-memory cache (high performance) |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `NullCacheProvider` for unit tests
//! - **Single Instance**: Use `MokaCacheProvider` for high performance

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;

// Re-export domain types used by cache providers
pub use codelens_application::ports::providers::cache::{CacheEntryConfig, CacheStats};
