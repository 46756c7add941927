//! Domain Entities
//!
//! Entities are the identity-bearing objects this system persists and
//! reasons about. Unlike value objects, entities carry a stable identity
//! that outlives any single field's value.
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CodeChunk`] | A semantic span of one file, the unit embedded and stored |
//! | [`ChunkMeta`] | Structured per-chunk symbol facts lifted from the AST |
//! | [`CollapsibleRegion`] | An AST range a downstream renderer may hide |
//! | [`FileRecord`] | Per-file fingerprint entry in the sidecar |
//! | [`IndexMeta`] | The sidecar itself: per-project fingerprint snapshot |

/// Code chunk entity and its structured metadata
pub mod code_chunk;
/// Collapsible AST regions
pub mod region;
/// Sidecar fingerprint entities
pub mod sidecar;

pub use code_chunk::{ChunkKind, ChunkMeta, CodeChunk, SymbolType};
pub use region::{CollapsibleRegion, RegionKind};
pub use sidecar::{EmbeddingsKey, FileRecord, IndexMeta, SIDECAR_VERSION};
