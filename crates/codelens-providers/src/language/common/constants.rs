//! Per-language chunk size targets and shared tree-sitter node-kind names.
//!
//! Complexity-adaptive sizing (simple/moderate/complex bands) and the
//! split-overlap size live in `codelens_domain::constants` since they are
//! domain-level tuning knobs, not language-specific ones.

/// Fallback chunk size, in source lines, used when no language processor
/// claims a file's extension.
pub const CHUNK_SIZE_GENERIC: usize = 50;

/// Per-language base target size, in characters, before complexity-based
/// adaptive sizing narrows it (see `AstTraverser::max_chunk_chars`).
pub const CHUNK_SIZE_RUST: usize = 1_800;
pub const CHUNK_SIZE_PYTHON: usize = 1_800;
pub const CHUNK_SIZE_GO: usize = 1_800;
pub const CHUNK_SIZE_C: usize = 1_500;
pub const CHUNK_SIZE_CPP: usize = 1_500;
pub const CHUNK_SIZE_JAVA: usize = 1_800;
pub const CHUNK_SIZE_JAVASCRIPT: usize = 1_800;
pub const CHUNK_SIZE_TYPESCRIPT: usize = 1_800;

// Tree-sitter node kind names shared by more than one processor's extraction
// rules. Language-specific node kinds that only one processor needs are
// written as string literals in that processor instead of living here.
pub const TS_NODE_FUNCTION_DEFINITION: &str = "function_definition";
pub const TS_NODE_FUNCTION_DECLARATION: &str = "function_declaration";
pub const TS_NODE_METHOD_DECLARATION: &str = "method_declaration";
pub const AST_NODE_STRUCT_SPECIFIER: &str = "struct_specifier";
pub const AST_NODE_CLASS_SPECIFIER: &str = "class_specifier";
