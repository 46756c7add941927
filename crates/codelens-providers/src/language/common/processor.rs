//! Language processor trait and base implementation
//!
//! Defines the `LanguageProcessor` trait that gives every language-specific
//! chunker a common interface, and `BaseProcessor`, which every concrete
//! processor wraps to get AST traversal and regex fallback for free.

use super::config::LanguageConfig;
use super::fallback::GenericFallbackChunker;
use super::traverser::AstTraverser;
use codelens_domain::entities::CodeChunk;
use codelens_domain::value_objects::Language;
use sha1::{Digest, Sha1};

/// Same digest the sidecar uses for file/chunk fingerprints, so a chunk's
/// `hash` field and its sidecar `chunk_hashes` entry are directly comparable.
pub(crate) fn hash_content(content: &str) -> String {
    let digest = Sha1::digest(content.as_bytes());
    hex::encode(digest)
}

/// Trait for language-specific processing
///
/// # Example
///
/// ```ignore
/// use codelens_providers::language::common::LanguageProcessor;
///
/// let mut parser = tree_sitter::Parser::new();
/// parser.set_language(&processor.get_language())?;
/// let tree = parser.parse(content, None).unwrap();
///
/// let chunks = processor.extract_chunks_with_tree_sitter(&tree, content, "main.rs", &"rust".to_string());
/// let chunks = processor.extract_chunks_fallback(content, "main.rs", &"rust".to_string());
/// ```
pub trait LanguageProcessor: Send + Sync {
    /// Get language configuration
    fn config(&self) -> &LanguageConfig;

    /// Extract chunks using tree-sitter
    fn extract_chunks_with_tree_sitter(
        &self,
        tree: &tree_sitter::Tree,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk>;

    /// Extract chunks using fallback method
    fn extract_chunks_fallback(
        &self,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk>;

    /// Get the language instance
    fn get_language(&self) -> tree_sitter::Language {
        self.config().get_language()
    }
}

/// Base processor struct that holds configuration
#[derive(Debug)]
pub struct BaseProcessor {
    config: LanguageConfig,
}

impl BaseProcessor {
    /// Create a new base processor with configuration
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }
}

impl LanguageProcessor for BaseProcessor {
    fn config(&self) -> &LanguageConfig {
        &self.config
    }

    fn extract_chunks_with_tree_sitter(
        &self,
        tree: &tree_sitter::Tree,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk> {
        let mut ranked = Vec::new();
        let mut cursor = tree.walk();

        if cursor.goto_first_child() {
            let traverser =
                AstTraverser::new(&self.config().extraction_rules, language).with_max_chunks(75);
            traverser.traverse_and_extract(&mut cursor, content, file_name, 0, &mut ranked);
        }

        // Keep the highest-priority boundaries first, then file order, and
        // trim to the per-file cap before handing chunks to the indexer.
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.chunk.start_line.cmp(&b.chunk.start_line))
        });
        ranked.truncate(50);

        let mut chunks: Vec<CodeChunk> = ranked.into_iter().map(|r| r.chunk).collect();
        chunks.sort_by_key(|c| c.start_line);
        for (idx, chunk) in chunks.iter_mut().enumerate() {
            chunk.chunk_index = idx as u32;
            chunk.id = CodeChunk::make_id(file_name, idx as u32);
        }
        chunks
    }

    fn extract_chunks_fallback(
        &self,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk> {
        GenericFallbackChunker::new(self.config()).chunk_with_patterns(content, file_name, language)
    }
}
