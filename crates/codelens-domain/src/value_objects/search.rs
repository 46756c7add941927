//! Search-Related Value Objects
//!
//! Value objects representing vector store rows returned from similarity
//! search or predicate-only listing.

use crate::entities::{ChunkKind, SymbolType};
use crate::value_objects::Language;
use serde::{Deserialize, Serialize};

/// Value Object: a vector store row, as returned by `search_by_vector`,
/// `list`, and file-browsing operations.
///
/// Carries the full scalar projection of a [`crate::entities::CodeChunk`]
/// plus its stored vector, so the duplicate detector can reuse `vector` and
/// `content_raw` without a second round trip to the store.
///
/// ## Example
///
/// ```ignore
/// use codelens_domain::value_objects::SearchResult;
///
/// fn rank(results: &[SearchResult]) {
///     for r in results {
///         println!("{}:{}-{} ({:.3})", r.file_path, r.start_line, r.end_line, r.score.unwrap_or(0.0));
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Row identity, `"<relative-path>:<chunk_index>"`
    pub id: String,
    /// Path to the source file
    pub file_path: String,
    /// 1-indexed, inclusive start line
    pub start_line: u32,
    /// 1-indexed, inclusive end line
    pub end_line: u32,
    /// Position within the file's chunk sequence
    pub chunk_index: u32,
    /// Stored text used for embedding/display
    pub content: String,
    /// Raw source slice, with no added context
    pub content_raw: String,
    /// Code vs. plain-text chunk
    pub chunk_type: ChunkKind,
    /// `1 - distance` from the backend's kNN; `None` for predicate-only listings
    pub score: Option<f64>,
    /// The stored embedding vector, for duplicate-detector reuse
    pub vector: Vec<f32>,
    /// Programming language of the matched code
    pub language: Language,
    /// Recovered symbol name, when one exists
    pub symbol_name: Option<String>,
    /// Universal symbol classification
    pub symbol_type: Option<SymbolType>,
    /// Cyclomatic complexity
    pub complexity: u32,
    /// Whether the symbol is part of the module's public surface
    pub is_exported: bool,
    /// Nearest enclosing class/namespace/impl name
    pub parent_scope: Option<String>,
}
