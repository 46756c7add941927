// Allow collapsible_if for complex conditional logic
#![allow(clippy::collapsible_if)]

//! # Codelens - Provider Implementations
//!
//! This crate contains all user-selectable provider implementations following
//! Clean Architecture principles. Each provider implements a port (trait)
//! defined in `codelens-domain` or `codelens-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Ollama, VoyageAI, Gemini, FastEmbed, Null |
//! | Vector Store | `VectorStoreProvider` | InMemory, Null, Filesystem |
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | Events | `EventPublisher` | Tokio, Nats, Null |
//! | Language | `LanguageChunkingProvider` | Rust, Python, Go, Java, etc. |
//!
//! ## Feature Flags
//!
//! Each provider can be enabled/disabled via feature flags for minimal builds:
//!
//! ```toml
//! [dependencies]
//! codelens-providers = { version = "0.1", default-features = false, features = ["embedding-ollama", "cache-moka"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use codelens_providers::embedding::OllamaEmbeddingProvider;
//! use codelens_providers::cache::MokaCacheProvider;
//! use codelens_providers::language::RustProcessor;
//! ```

// Re-export commonly used port traits. Cache and vector store ports live in
// codelens-domain; embedding and language chunking ports live one ring out,
// in codelens-application.
pub use codelens_domain::error::{Error, Result};
pub use codelens_domain::ports::providers::{CacheProvider, VectorStoreProvider};
pub use codelens_application::ports::providers::{EmbeddingProvider, LanguageChunkingProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` trait for various embedding APIs.
pub mod embedding;

/// Vector store provider implementations
///
/// Implements `VectorStoreProvider` trait for vector storage backends.
pub mod vector_store;

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;

/// Event publisher implementations (simple EventPublisher trait)
///
/// Implements `EventPublisher` trait for event bus backends.
pub mod events;

/// HTTP client abstractions
///
/// Provides `HttpClientProvider` trait and configuration for API-based providers.
pub mod http;

/// Code chunking provider implementations
///
/// Implements `CodeChunker` trait for intelligent code chunking.
/// Provides `IntelligentChunker` using tree-sitter and language-specific processors.
pub mod chunking;

/// Language chunking provider implementations
///
/// Implements `LanguageChunkingProvider` trait for AST-based code parsing.
/// Also provides `IntelligentChunker` that implements `CodeChunker` trait.
pub mod language;

/// Admin provider implementations
///
/// Implements `PerformanceMetricsInterface` and `IndexingOperationsInterface` ports.
pub mod admin;
