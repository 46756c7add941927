//! Regex line-prefix chunking, used when a file fails to parse or when no
//! tree-sitter grammar claims its extension.
//!
//! Scans line by line, opening a new chunk whenever a configured pattern
//! matches at brace depth zero, and force-splitting a chunk that has grown
//! past the language's target size while still inside balanced braces.

use super::config::LanguageConfig;
use codelens_domain::constants::INDEXING_CHUNK_MIN_LENGTH;
use codelens_domain::entities::{ChunkKind, ChunkMeta, CodeChunk};
use codelens_domain::value_objects::Language;
use regex::Regex;

pub struct GenericFallbackChunker<'a> {
    config: &'a LanguageConfig,
}

impl<'a> GenericFallbackChunker<'a> {
    pub fn new(config: &'a LanguageConfig) -> Self {
        Self { config }
    }

    pub fn chunk_with_patterns(
        &self,
        content: &str,
        file_name: &str,
        language: &Language,
    ) -> Vec<CodeChunk> {
        let patterns: Vec<Regex> = self
            .config
            .fallback_patterns
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let max_chars = self.config.chunk_size;
        let mut chunks = Vec::new();
        let mut chunk_index = 0u32;
        let mut start = 0usize;
        let mut body: Vec<&str> = Vec::new();
        let mut depth: i64 = 0;

        for (line_no, line) in lines.iter().enumerate() {
            let is_boundary = !body.is_empty() && depth == 0 && patterns.iter().any(|re| re.is_match(line));
            let over_budget = depth == 0 && !body.is_empty() && body_len(&body) > max_chars;

            if is_boundary || over_budget {
                Self::push_chunk(&mut chunks, &body, start, line_no.saturating_sub(1), file_name, language, &mut chunk_index);
                body.clear();
                start = line_no;
            }

            depth += brace_delta(line);
            body.push(line);
        }

        if !body.is_empty() {
            Self::push_chunk(&mut chunks, &body, start, lines.len() - 1, file_name, language, &mut chunk_index);
        }

        chunks
    }

    fn push_chunk(
        chunks: &mut Vec<CodeChunk>,
        body: &[&str],
        start_line: usize,
        end_line: usize,
        file_name: &str,
        language: &Language,
        chunk_index: &mut u32,
    ) {
        let text = body.join("\n");
        let trimmed = text.trim();
        if trimmed.len() < INDEXING_CHUNK_MIN_LENGTH {
            return;
        }

        let raw = trimmed.to_string();
        let content = format!("// File: {file_name}\n{raw}");
        let hash = super::processor::hash_content(&content);

        chunks.push(CodeChunk {
            id: CodeChunk::make_id(file_name, *chunk_index),
            content,
            content_raw: raw,
            hash,
            file_path: file_name.to_string(),
            start_line: start_line as u32 + 1,
            end_line: end_line as u32 + 1,
            chunk_index: *chunk_index,
            chunk_type: ChunkKind::Code,
            language: language.clone(),
            meta: ChunkMeta::bare(language.clone()),
        });
        *chunk_index += 1;
    }
}

fn body_len(body: &[&str]) -> usize {
    body.iter().map(|l| l.len() + 1).sum()
}

/// Net change in brace/paren/bracket nesting depth contributed by one line.
/// Ignores string/comment context; a best-effort signal, not a parser.
fn brace_delta(line: &str) -> i64 {
    let mut delta = 0i64;
    for ch in line.chars() {
        match ch {
            '{' | '(' | '[' => delta += 1,
            '}' | ')' | ']' => delta -= 1,
            _ => {}
        }
    }
    delta
}
