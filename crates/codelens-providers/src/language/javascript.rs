//! JavaScript/TypeScript language processor for AST-based code chunking.
//!
//! One processor backs both languages since they share almost every chunk
//! boundary node kind; the constructor picks which grammar and chunk size
//! target to use.

use crate::language::common::{
    BaseProcessor, CHUNK_SIZE_JAVASCRIPT, CHUNK_SIZE_TYPESCRIPT, LanguageConfig, LanguageProcessor,
    NodeExtractionRule, TS_NODE_FUNCTION_DECLARATION, TS_NODE_METHOD_DECLARATION,
};
use codelens_domain::entities::CodeChunk;
use codelens_domain::value_objects::Language;

/// JavaScript/TypeScript language processor.
pub struct JavaScriptProcessor {
    processor: BaseProcessor,
}

impl JavaScriptProcessor {
    /// Create a new processor. `typescript` selects the TypeScript grammar
    /// and its interface/type-alias extraction rules over plain JavaScript.
    pub fn new(typescript: bool) -> Self {
        let language = if typescript {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        } else {
            tree_sitter_javascript::LANGUAGE.into()
        };

        let mut rules = vec![
            NodeExtractionRule::primary(&[
                TS_NODE_FUNCTION_DECLARATION,
                TS_NODE_METHOD_DECLARATION,
                "class_declaration",
                "arrow_function",
            ]),
            NodeExtractionRule::secondary(&["lexical_declaration", "variable_declaration"]),
        ];
        if typescript {
            rules.push(NodeExtractionRule::primary(&[
                "interface_declaration",
                "type_alias_declaration",
                "enum_declaration",
            ]));
        }

        let chunk_size = if typescript {
            CHUNK_SIZE_TYPESCRIPT
        } else {
            CHUNK_SIZE_JAVASCRIPT
        };

        let mut fallback_patterns = vec![
            r"^function ".to_string(),
            r"^export function ".to_string(),
            r"^class ".to_string(),
            r"^export class ".to_string(),
            r"^const .*=.*=>".to_string(),
        ];
        if typescript {
            fallback_patterns.push(r"^interface ".to_string());
            fallback_patterns.push(r"^type ".to_string());
        }

        let config = LanguageConfig::new(language)
            .with_rules(rules)
            .with_fallback_patterns(fallback_patterns)
            .with_chunk_size(chunk_size);

        Self {
            processor: BaseProcessor::new(config),
        }
    }
}

impl Default for JavaScriptProcessor {
    fn default() -> Self {
        Self::new(false)
    }
}

impl LanguageProcessor for JavaScriptProcessor {
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
