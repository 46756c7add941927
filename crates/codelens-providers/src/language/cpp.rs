//! C++ language processor for AST-based code chunking.

use crate::language::common::{
    AST_NODE_CLASS_SPECIFIER, AST_NODE_STRUCT_SPECIFIER, BaseProcessor, CHUNK_SIZE_CPP,
    LanguageConfig, LanguageProcessor, NodeExtractionRule, TS_NODE_FUNCTION_DEFINITION,
};
use codelens_domain::entities::CodeChunk;
use codelens_domain::value_objects::Language;

/// C++ language processor.
pub struct CppProcessor {
    processor: BaseProcessor,
}

impl Default for CppProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CppProcessor {
    /// Create a new C++ language processor
    pub fn new() -> Self {
        let config = LanguageConfig::new(tree_sitter_cpp::LANGUAGE.into())
            .with_rules(vec![
                NodeExtractionRule::primary(&[
                    TS_NODE_FUNCTION_DEFINITION,
                    AST_NODE_CLASS_SPECIFIER,
                    AST_NODE_STRUCT_SPECIFIER,
                ]),
                NodeExtractionRule::secondary(&["namespace_definition", "template_declaration"]),
                NodeExtractionRule::tertiary(&["enum_specifier", "using_declaration"]),
            ])
            .with_fallback_patterns(vec![
                r"^[a-zA-Z_].*\(.*\)\s*\{".to_string(),
                r"^class ".to_string(),
                r"^struct ".to_string(),
                r"^namespace ".to_string(),
                r"^template".to_string(),
            ])
            .with_chunk_size(CHUNK_SIZE_CPP);

        Self {
            processor: BaseProcessor::new(config),
        }
    }
}

impl LanguageProcessor for CppProcessor {
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
