//! Intelligent chunking engine
//!
//! Provides the main IntelligentChunker that orchestrates language-specific
//! chunking using tree-sitter and fallback methods.

use super::common::constants::CHUNK_SIZE_GENERIC;
use super::helpers::{is_language_supported, language_from_extension};
use super::{
    CProcessor, CppProcessor, GoProcessor, JavaProcessor, JavaScriptProcessor, LanguageProcessor,
    PythonProcessor, RustProcessor,
};
use async_trait::async_trait;
use codelens_application::domain_services::chunking::{ChunkingOptions, ChunkingResult, CodeChunker};
use codelens_domain::entities::{ChunkKind, ChunkMeta, CodeChunk};
use codelens_domain::error::{Error, Result};
use codelens_domain::value_objects::Language;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Language processor registry, keyed by the language identifier returned
/// from `language_from_extension`.
pub(crate) static LANGUAGE_PROCESSORS: LazyLock<
    HashMap<String, Box<dyn LanguageProcessor + Send + Sync>>,
> = LazyLock::new(|| {
    let mut processors: HashMap<String, Box<dyn LanguageProcessor + Send + Sync>> = HashMap::new();

    processors.insert("rust".to_string(), Box::new(RustProcessor::new()));
    processors.insert("python".to_string(), Box::new(PythonProcessor::new()));
    processors.insert(
        "javascript".to_string(),
        Box::new(JavaScriptProcessor::new(false)),
    );
    processors.insert(
        "typescript".to_string(),
        Box::new(JavaScriptProcessor::new(true)),
    );
    processors.insert("go".to_string(), Box::new(GoProcessor::new()));
    processors.insert("java".to_string(), Box::new(JavaProcessor::new()));
    processors.insert("c".to_string(), Box::new(CProcessor::new()));
    processors.insert("cpp".to_string(), Box::new(CppProcessor::new()));

    processors
});

/// Intelligent chunking engine using tree-sitter
#[derive(Default)]
pub struct IntelligentChunker;

impl IntelligentChunker {
    /// Create a new intelligent chunker
    pub fn new() -> Self {
        Self
    }

    /// Chunk code based on language-specific structural analysis
    pub fn chunk_code(
        &self,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk> {
        if let Some(processor) = LANGUAGE_PROCESSORS.get(language) {
            match self.parse_with_tree_sitter(content, processor.get_language()) {
                Ok(tree) => {
                    let chunks = processor
                        .extract_chunks_with_tree_sitter(&tree, content, file_name, language);
                    if !chunks.is_empty() {
                        return chunks;
                    }
                }
                Err(_) => {
                    let chunks = processor.extract_chunks_fallback(content, file_name, language);
                    if !chunks.is_empty() {
                        return chunks;
                    }
                }
            }
        }

        self.chunk_generic(content, file_name, language)
    }

    /// Chunk code asynchronously (offloads to blocking thread)
    pub async fn chunk_code_async(
        &self,
        content: String,
        file_name: String,
        language: Language,
    ) -> Vec<CodeChunk> {
        tokio::task::spawn_blocking(move || {
            let chunker = Self::new();
            chunker.chunk_code(&content, &file_name, &language)
        })
        .await
        .unwrap_or_default()
    }

    /// Plain line-count chunking for languages with no registered processor
    /// (e.g. markdown, config files swept up by the indexer's text path).
    fn chunk_generic(&self, content: &str, file_name: &str, language: &Language) -> Vec<CodeChunk> {
        let lines: Vec<&str> = content.lines().collect();
        let mut chunks = Vec::new();
        let chunk_size = CHUNK_SIZE_GENERIC;

        for (chunk_idx, chunk_lines) in lines.chunks(chunk_size).enumerate() {
            let start_line = chunk_idx * chunk_size;
            let end_line = start_line + chunk_lines.len() - 1;

            let raw = chunk_lines.join("\n").trim().to_string();
            if raw.len() < 20 {
                continue;
            }

            let content = format!("// File: {file_name}\n{raw}");
            let hash = super::common::processor::hash_content(&content);

            chunks.push(CodeChunk {
                id: CodeChunk::make_id(file_name, chunk_idx as u32),
                content,
                content_raw: raw,
                hash,
                file_path: file_name.to_string(),
                start_line: start_line as u32 + 1,
                end_line: end_line as u32 + 1,
                chunk_index: chunk_idx as u32,
                chunk_type: ChunkKind::Text,
                language: language.clone(),
                meta: ChunkMeta::bare(language.clone()),
            });
        }

        chunks
    }

    /// Parse code with tree-sitter
    fn parse_with_tree_sitter(
        &self,
        content: &str,
        language: tree_sitter::Language,
    ) -> Result<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::internal(format!("Failed to set tree-sitter language: {:?}", e)))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| Error::internal("Tree-sitter parsing failed".to_string()))?;

        Ok(tree)
    }
}

#[async_trait]
impl CodeChunker for IntelligentChunker {
    async fn chunk_file(
        &self,
        file_path: &Path,
        _options: ChunkingOptions,
    ) -> Result<ChunkingResult> {
        let content = tokio::fs::read_to_string(file_path)
            .await
            .map_err(|e| Error::io(e.to_string()))?;

        let file_name = file_path.to_string_lossy().to_string();
        let ext = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let language = language_from_extension(ext);

        self.chunk_content(&content, &file_name, language, _options)
            .await
    }

    async fn chunk_content(
        &self,
        content: &str,
        file_name: &str,
        language: Language,
        _options: ChunkingOptions,
    ) -> Result<ChunkingResult> {
        let chunks = self.chunk_code(content, file_name, &language);
        let used_ast = is_language_supported(&language);

        Ok(ChunkingResult {
            file_path: file_name.to_string(),
            language,
            chunks,
            used_ast,
        })
    }

    async fn chunk_batch(
        &self,
        file_paths: &[&Path],
        options: ChunkingOptions,
    ) -> Result<Vec<ChunkingResult>> {
        let mut results = Vec::with_capacity(file_paths.len());
        for path in file_paths {
            results.push(self.chunk_file(path, options).await?);
        }
        Ok(results)
    }

    fn supported_languages(&self) -> Vec<Language> {
        LANGUAGE_PROCESSORS.keys().cloned().collect()
    }
}

/// Universal Language Chunking Provider
///
/// A provider that supports all registered languages by delegating to the
/// IntelligentChunker. Used for dependency injection where a single provider
/// instance needs to handle any supported language.
#[derive(shaku::Component)]
#[shaku(interface = codelens_application::ports::providers::LanguageChunkingProvider)]
pub struct UniversalLanguageChunkingProvider {
    #[shaku(default)]
    chunker: IntelligentChunker,
}

impl UniversalLanguageChunkingProvider {
    /// Create a new universal language chunking provider
    pub fn new() -> Self {
        Self {
            chunker: IntelligentChunker::new(),
        }
    }
}

impl Default for UniversalLanguageChunkingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl codelens_application::ports::providers::LanguageChunkingProvider
    for UniversalLanguageChunkingProvider
{
    fn language(&self) -> codelens_domain::value_objects::Language {
        "universal".to_string()
    }

    fn extensions(&self) -> &[&'static str] {
        &["rs", "py", "js", "ts", "java", "go", "c", "cpp"]
    }

    fn chunk(&self, content: &str, file_path: &str) -> Vec<codelens_domain::entities::CodeChunk> {
        let path = std::path::Path::new(file_path);
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let language = super::helpers::language_from_extension(ext);
        self.chunker.chunk_code(content, file_path, &language)
    }

    fn provider_name(&self) -> &str {
        "universal-intelligent-chunker"
    }
}

use codelens_application::ports::registry::{
    LanguageProviderConfig, LanguageProviderEntry, LANGUAGE_PROVIDERS,
};

fn universal_factory(
    _config: &LanguageProviderConfig,
) -> std::result::Result<std::sync::Arc<dyn codelens_application::ports::providers::LanguageChunkingProvider>, String>
{
    Ok(std::sync::Arc::new(UniversalLanguageChunkingProvider::new()))
}

#[linkme::distributed_slice(LANGUAGE_PROVIDERS)]
static UNIVERSAL_LANGUAGE_PROVIDER: LanguageProviderEntry = LanguageProviderEntry {
    name: "universal",
    description: "Universal language chunker supporting all registered languages via tree-sitter",
    factory: universal_factory,
};
