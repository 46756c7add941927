//! Java language processor for AST-based code chunking.

use crate::language::common::{
    BaseProcessor, CHUNK_SIZE_JAVA, LanguageConfig, LanguageProcessor, NodeExtractionRule,
    TS_NODE_METHOD_DECLARATION,
};
use codelens_domain::entities::CodeChunk;
use codelens_domain::value_objects::Language;

/// Java language processor.
pub struct JavaProcessor {
    processor: BaseProcessor,
}

impl Default for JavaProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaProcessor {
    /// Create a new Java language processor
    pub fn new() -> Self {
        let config = LanguageConfig::new(tree_sitter_java::LANGUAGE.into())
            .with_rules(vec![
                NodeExtractionRule::primary(&[
                    "class_declaration",
                    "interface_declaration",
                    TS_NODE_METHOD_DECLARATION,
                ]),
                NodeExtractionRule::secondary(&["enum_declaration", "constructor_declaration"]),
                NodeExtractionRule::tertiary(&["field_declaration", "import_declaration"]),
            ])
            .with_fallback_patterns(vec![
                r"^\s*(public|private|protected).*class ".to_string(),
                r"^\s*(public|private|protected).*interface ".to_string(),
                r"^\s*(public|private|protected).*\(.*\)\s*\{".to_string(),
            ])
            .with_chunk_size(CHUNK_SIZE_JAVA);

        Self {
            processor: BaseProcessor::new(config),
        }
    }
}

impl LanguageProcessor for JavaProcessor {
    fn config(&self) -> &LanguageConfig {
        self.processor.config()
    }

    fn extract_chunks_with_tree_sitter(
        &self,
        tree: &tree_sitter::Tree,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk> {
        self.processor
            .extract_chunks_with_tree_sitter(tree, content, file_name, language)
    }

    fn extract_chunks_fallback(
        &self,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk> {
        self.processor
            .extract_chunks_fallback(content, file_name, language)
    }
}
