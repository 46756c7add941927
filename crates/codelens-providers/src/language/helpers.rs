//! Extension-to-language mapping and small registry helpers shared by the
//! chunking engine and the provider-facing re-exports.

use super::engine::LANGUAGE_PROCESSORS;
use codelens_domain::value_objects::Language;

/// Map a file extension (without the leading dot) to a language identifier.
/// Unknown extensions fall back to `"text"`, which the generic chunker
/// handles as plain-text line splitting.
pub fn language_from_extension(ext: &str) -> Language {
    match ext.to_ascii_lowercase().as_str() {
        "rs" => "rust",
        "py" | "pyi" => "python",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "go" => "go",
        "java" => "java",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        _ => "text",
    }
    .to_string()
}

/// Whether a language has a registered AST-based processor.
pub fn is_language_supported(language: &Language) -> bool {
    LANGUAGE_PROCESSORS.contains_key(language)
}

/// All languages with a registered AST-based processor.
pub fn supported_languages() -> Vec<Language> {
    LANGUAGE_PROCESSORS.keys().cloned().collect()
}

/// The configured base chunk size for a language, or the generic fallback
/// size when the language has no dedicated processor.
pub fn get_chunk_size(language: &Language) -> usize {
    LANGUAGE_PROCESSORS
        .get(language)
        .map(|p| p.config().chunk_size)
        .unwrap_or(super::common::CHUNK_SIZE_GENERIC)
}
