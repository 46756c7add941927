//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `infrastructure/constants.rs`.

// ============================================================================
// INDEXING DOMAIN CONSTANTS
// ============================================================================

/// Default batch size for indexing operations
pub const INDEXING_BATCH_SIZE: usize = 10;

/// Minimum character length for a code chunk to be indexed
pub const INDEXING_CHUNK_MIN_LENGTH: usize = 25;

/// Minimum number of lines for a code chunk to be indexed
pub const INDEXING_CHUNK_MIN_LINES: usize = 2;

/// Maximum number of chunks extracted from a single file
pub const INDEXING_CHUNKS_MAX_PER_FILE: usize = 50;

/// Default number of concurrent parse+embed workers
pub const INDEXING_DEFAULT_CONCURRENCY: usize = 8;

/// Default number of chunks per embedding request batch
pub const EMBEDDING_BATCH_SIZE: usize = 256;

/// Files larger than this are skipped entirely during enumeration
pub const INDEXING_MAX_FILE_SIZE_BYTES: u64 = 500 * 1024;

/// Target chunk size, in characters, for low-complexity symbols
pub const CHUNK_SIZE_SIMPLE: usize = 800;

/// Target chunk size, in characters, for medium-complexity symbols
pub const CHUNK_SIZE_MODERATE: usize = 1_500;

/// Target chunk size, in characters, for high-complexity symbols
pub const CHUNK_SIZE_COMPLEX: usize = 2_500;

/// Overlap, in characters, applied when a chunk must be split on length alone
pub const CHUNK_OVERLAP_SIZE: usize = 100;

// ============================================================================
// DUPLICATE DETECTION DOMAIN CONSTANTS
// ============================================================================

/// Combined-similarity threshold above which two chunks are treated as exact duplicates
pub const DUPLICATE_THRESHOLD_EXACT: f64 = 0.98;

/// Combined-similarity threshold for the "high" confidence duplicate band
pub const DUPLICATE_THRESHOLD_HIGH: f64 = 0.90;

/// Combined-similarity threshold for the "medium" confidence duplicate band
pub const DUPLICATE_THRESHOLD_MEDIUM: f64 = 0.85;

/// Combined-similarity threshold below which pairs are not reported at all
pub const DUPLICATE_THRESHOLD_LOW: f64 = 0.70;

/// Weight given to cosine similarity in the combined-similarity score
pub const DUPLICATE_WEIGHT_COSINE: f64 = 0.8;

/// Weight given to shingle-Jaccard similarity in the combined-similarity score
pub const DUPLICATE_WEIGHT_SHINGLE: f64 = 0.2;

/// Shingle (n-gram) size used for textual similarity
pub const DUPLICATE_SHINGLE_SIZE: usize = 2;

/// Maximum number of nearest-neighbor candidates considered per chunk during
/// duplicate pair discovery
pub const DUPLICATE_MAX_CANDIDATES_PER_CHUNK: usize = 30;

// ============================================================================
// VECTOR STORE DOMAIN CONSTANTS
// ============================================================================

/// Maximum number of chunk IDs submitted per delete-by-file batch
pub const VECTOR_STORE_DELETE_BATCH_SIZE: usize = 200;

/// Sentinel row ID written to a freshly created, otherwise-empty collection
/// so `open_or_create` can distinguish "exists but empty" from "never created"
pub const VECTOR_STORE_INIT_SENTINEL_ID: &str = "__init__";

// ============================================================================
// WATCHER DOMAIN CONSTANTS
// ============================================================================

/// Default quiet period after the last filesystem event before reindexing, in milliseconds
pub const WATCHER_DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Default fallback poll interval when native filesystem events are unavailable, in seconds
pub const WATCHER_DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Consecutive reindex failures tolerated before the watcher stops retrying
pub const WATCHER_MAX_CONSECUTIVE_ERRORS: u32 = 3;
