//! Code chunk entity and its structured metadata
//!
//! `CodeChunk` is the unit the rest of the system reasons about: a contiguous,
//! 1-indexed line range of exactly one file, carrying both the text used for
//! embedding (`content`) and the exact source slice used for duplicate
//! comparison (`content_raw`).

use crate::value_objects::Language;
use serde::{Deserialize, Serialize};

/// Whether a chunk was produced from a boundary AST node or from a plain
/// text split (used for non-code files such as markdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// A chunk carrying a recognized code symbol
    Code,
    /// A chunk of plain text (markdown, config, etc.)
    Text,
}

/// The universal symbol kind every language plugin maps its AST nodes onto.
///
/// Consumers filter on this enum without knowing the source language;
/// language-specific refinements live in [`ChunkMeta::variant`] instead of
/// growing this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolType {
    /// A free function or arrow-function assignment
    Function,
    /// A class, struct, or equivalent nominal type with behavior
    Class,
    /// A method defined on a class/impl/trait
    Method,
    /// A type alias, interface, or similar non-executable type declaration
    Type,
    /// A top-level variable, constant, or static binding
    Variable,
    /// An enum declaration
    Enum,
    /// A namespace/module declaration
    Module,
}

/// Structured, per-chunk symbol facts lifted from the AST.
///
/// This is a fixed record, not a dynamic map: every field is either a
/// concrete scalar or `Option`/`Vec` over one, so consumers can filter on any
/// field without caring which language plugin produced it. See the
/// repository's design notes for why this diverges from a `serde_json::Value`
/// bag of metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkMeta {
    /// Name of the symbol, when one can be recovered (e.g. anonymous
    /// closures have none)
    pub symbol_name: Option<String>,
    /// Universal symbol classification
    pub symbol_type: Option<SymbolType>,
    /// Language-tagged refinement (`"interface"`, `"dataclass"`, `"async"`, …)
    pub variant: Option<String>,
    /// Source language of the chunk
    pub language: Language,
    /// Whether the symbol is part of the module's public surface
    pub is_exported: bool,
    /// Whether the symbol is declared `async`
    pub is_async: bool,
    /// Whether the symbol is a `static`/class-level member
    pub is_static: bool,
    /// Whether the symbol is declared abstract
    pub is_abstract: bool,
    /// Normalized decorator/attribute names (`@name`, without arguments)
    pub decorators: Vec<String>,
    /// Cyclomatic complexity, see the chunker's scoring rules
    pub complexity: u32,
    /// Whether a leading doc comment/docstring was found
    pub has_documentation: bool,
    /// Nearest enclosing class/namespace/impl name
    pub parent_scope: Option<String>,
    /// Nesting depth of `parent_scope`, when known
    pub scope_depth: Option<u32>,
    /// File-level imports judged relevant to this chunk (see the chunker's
    /// relevant-imports pass)
    pub imports: Option<Vec<String>>,
}

impl ChunkMeta {
    /// A bare metadata record for a given language with every flag false and
    /// no symbol recovered — used by the regex fallback path and by tests.
    pub fn bare(language: Language) -> Self {
        Self {
            language,
            symbol_type: Some(SymbolType::Module),
            ..Default::default()
        }
    }
}

/// A semantically coherent span of source, the unit the indexer embeds and
/// stores and the unit the search engine returns.
///
/// Identity is `"<relative-path>:<chunk_index>"`. Chunks are never mutated
/// after insert: updates happen by delete-and-reinsert in the vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeChunk {
    /// Stable identity, `"<relative-path>:<chunk_index>"`
    pub id: String,
    /// Stored text used for embedding and display; may carry a structured
    /// context prefix (imports block, keyword line) ahead of the source
    pub content: String,
    /// The exact source slice, with no added context — used for duplicate
    /// detection's textual similarity
    pub content_raw: String,
    /// SHA-1 of `content`; the unit of incremental invalidation
    pub hash: String,
    /// Project-relative path with `/` separators
    pub file_path: String,
    /// 1-indexed, inclusive start line
    pub start_line: u32,
    /// 1-indexed, inclusive end line; always `>= start_line`
    pub end_line: u32,
    /// Position of this chunk within its file's chunk sequence
    pub chunk_index: u32,
    /// Code vs. plain-text chunk
    pub chunk_type: ChunkKind,
    /// Source language
    pub language: Language,
    /// Structured per-symbol metadata
    pub meta: ChunkMeta,
}

impl CodeChunk {
    /// Build the stable chunk identity from a relative path and index.
    pub fn make_id(file_path: &str, chunk_index: u32) -> String {
        format!("{file_path}:{chunk_index}")
    }

    /// Number of lines this chunk spans, inclusive on both ends.
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(language: Language) -> CodeChunk {
        CodeChunk {
            id: CodeChunk::make_id("src/lib.rs", 0),
            content: "// File: src/lib.rs\nfn add(x: i32, y: i32) -> i32 { x + y }".to_string(),
            content_raw: "fn add(x: i32, y: i32) -> i32 { x + y }".to_string(),
            hash: "deadbeef".to_string(),
            file_path: "src/lib.rs".to_string(),
            start_line: 1,
            end_line: 1,
            chunk_index: 0,
            chunk_type: ChunkKind::Code,
            language,
            meta: ChunkMeta {
                symbol_name: Some("add".to_string()),
                symbol_type: Some(SymbolType::Function),
                is_exported: true,
                ..ChunkMeta::bare("rust".to_string())
            },
        }
    }

    #[test]
    fn identity_matches_path_and_index() {
        let chunk = sample("rust".to_string());
        assert_eq!(chunk.id, "src/lib.rs:0");
    }

    #[test]
    fn line_count_is_inclusive() {
        let mut chunk = sample("rust".to_string());
        chunk.start_line = 10;
        chunk.end_line = 12;
        assert_eq!(chunk.line_count(), 3);
    }

    #[test]
    fn content_raw_excludes_context_prefix() {
        let chunk = sample("rust".to_string());
        assert!(chunk.content.contains("File:"));
        assert!(!chunk.content_raw.contains("File:"));
    }
}
