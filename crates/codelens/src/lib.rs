//! # codelens
//!
//! A hybrid semantic and structural code search engine: parses a codebase into
//! AST-bounded chunks, embeds them, and serves similarity search with
//! structural filters, near-duplicate detection, and incremental reindexing.
//!
//! This crate is the public facade: it re-exports the domain and
//! infrastructure layers and hosts the `codelens` CLI binary.
//!
//! ## Architecture
//!
//! - `domain` - entities, ports, and value objects (no IO)
//! - `application` - indexing, search, and duplicate-detection use cases
//! - `infrastructure` - configuration, logging, and dependency wiring

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use codelens_domain::*;
}

/// Application layer - use cases (indexing, search, duplicates, watch)
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use codelens_application::*;
}

/// Infrastructure layer - DI, config, and infrastructure services
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use codelens_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;
