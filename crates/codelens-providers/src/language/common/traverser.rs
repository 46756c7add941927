//! Walks a tree-sitter AST and turns matched boundary nodes into `CodeChunk`s.
//!
//! Implements the boundary-detection, doc-comment lookback, and
//! complexity-adaptive sizing parts of the chunking contract. Splitting an
//! oversized boundary node falls back to child-node boundaries first, then
//! plain line slicing — a simplification of the full class/body-statement
//! split strategy, recorded in the repository's design notes.

use super::config::NodeExtractionRule;
use codelens_domain::constants::{CHUNK_SIZE_COMPLEX, CHUNK_SIZE_MODERATE, CHUNK_SIZE_SIMPLE};
use codelens_domain::entities::{ChunkKind, ChunkMeta, CodeChunk, SymbolType};
use codelens_domain::value_objects::Language;
use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::{Node, TreeCursor};

const DOC_COMMENT_LOOKBACK_LINES: usize = 20;

static CALL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap());
static TYPE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([A-Z][A-Za-z0-9_]*)\b").unwrap());

const CALL_STOPWORDS: &[&str] = &[
    "if", "for", "while", "match", "switch", "return", "fn", "function", "def", "catch", "sizeof",
];

/// A chunk paired with the priority of the rule that produced it, used only
/// to decide which chunks survive the per-file cap.
pub(crate) struct RankedChunk {
    pub chunk: CodeChunk,
    pub priority: i64,
}

pub struct AstTraverser<'a> {
    rules: &'a [NodeExtractionRule],
    language: &'a Language,
    max_chunks: usize,
}

impl<'a> AstTraverser<'a> {
    pub fn new(rules: &'a [NodeExtractionRule], language: &'a Language) -> Self {
        Self {
            rules,
            language,
            max_chunks: 75,
        }
    }

    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = max_chunks;
        self
    }

    pub(crate) fn traverse_and_extract(
        &self,
        cursor: &mut TreeCursor,
        content: &str,
        file_name: &str,
        depth: usize,
        out: &mut Vec<RankedChunk>,
    ) {
        loop {
            if out.len() >= self.max_chunks {
                return;
            }

            let node = cursor.node();
            if let Some(rule) = self.matching_rule(node.kind()) {
                if depth <= rule.max_depth {
                    if let Some(ranked) = self.extract_node(&node, content, file_name, rule, out.len() as u32) {
                        out.extend(ranked);
                    }
                }
            }

            if cursor.goto_first_child() {
                self.traverse_and_extract(cursor, content, file_name, depth + 1, out);
                cursor.goto_parent();
            }

            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    fn matching_rule(&self, kind: &str) -> Option<&'a NodeExtractionRule> {
        self.rules
            .iter()
            .find(|rule| rule.node_types.iter().any(|k| k == kind))
    }

    fn extract_node(
        &self,
        node: &Node,
        content: &str,
        file_name: &str,
        rule: &NodeExtractionRule,
        start_index: u32,
    ) -> Option<Vec<RankedChunk>> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return None;
        }

        let node_start_line = node.start_position().row;
        let node_end_line = node.end_position().row.min(lines.len().saturating_sub(1));
        if node_end_line + 1 - node_start_line < rule.min_lines {
            return None;
        }

        let raw_body = lines[node_start_line..=node_end_line].join("\n");
        if raw_body.trim().len() < rule.min_length {
            return None;
        }

        let doc_start = if rule.include_context {
            extend_for_doc_comment(&lines, node_start_line)
        } else {
            node_start_line
        };

        let symbol_name = extract_name(node, content);
        let symbol_type = symbol_type_for(node.kind());
        let complexity = estimate_complexity(node);
        let max_chars = adaptive_max_chars(complexity);

        let mut meta = ChunkMeta {
            symbol_name: symbol_name.clone(),
            symbol_type: Some(symbol_type),
            language: self.language.clone(),
            is_exported: is_exported(node, content, self.language),
            complexity,
            has_documentation: doc_start < node_start_line,
            ..ChunkMeta::bare(self.language.clone())
        };

        let full_len: usize = lines[doc_start..=node_end_line].iter().map(|l| l.len() + 1).sum();
        if full_len <= max_chars {
            let chunk = self.build_chunk(file_name, doc_start, node_end_line, &lines, &symbol_name, &meta, start_index);
            return Some(vec![RankedChunk {
                chunk,
                priority: rule.priority,
            }]);
        }

        // Oversized: split at the node's direct children first, falling back
        // to plain line slicing if the node has no usable children.
        let mut pieces = split_node_children(node, &lines, max_chars);
        if pieces.is_empty() {
            pieces = split_lines(doc_start, node_end_line, &lines, max_chars);
        }

        let mut out = Vec::with_capacity(pieces.len());
        for (idx, (start, end)) in pieces.into_iter().enumerate() {
            meta.has_documentation = idx == 0 && doc_start < node_start_line;
            let chunk = self.build_chunk(file_name, start, end, &lines, &symbol_name, &meta, start_index + idx as u32);
            out.push(RankedChunk {
                chunk,
                priority: rule.priority,
            });
        }
        Some(out)
    }

    fn build_chunk(
        &self,
        file_name: &str,
        start_line: usize,
        end_line: usize,
        lines: &[&str],
        symbol_name: &Option<String>,
        meta: &ChunkMeta,
        chunk_index: u32,
    ) -> CodeChunk {
        let raw = lines[start_line..=end_line].join("\n");
        let header = format!(
            "// File: {file_name}\n// Type: {}\n// Name: {}\n// Exported: {}\n// Keywords: {}\n",
            meta.symbol_type
                .map(|t| format!("{t:?}"))
                .unwrap_or_else(|| "Unknown".to_string()),
            symbol_name.as_deref().unwrap_or("anonymous"),
            meta.is_exported,
            extract_keywords(&raw).join(", "),
        );
        let content = format!("{header}{raw}");
        let hash = super::processor::hash_content(&content);

        CodeChunk {
            id: CodeChunk::make_id(file_name, chunk_index),
            content,
            content_raw: raw,
            hash,
            file_path: file_name.to_string(),
            start_line: start_line as u32 + 1,
            end_line: end_line as u32 + 1,
            chunk_index,
            chunk_type: ChunkKind::Code,
            language: self.language.clone(),
            meta: meta.clone(),
        }
    }
}

fn extend_for_doc_comment(lines: &[&str], start_line: usize) -> usize {
    let mut cursor = start_line;
    let lookback = start_line.saturating_sub(DOC_COMMENT_LOOKBACK_LINES);
    while cursor > lookback {
        let candidate = lines[cursor - 1].trim();
        let is_doc = candidate.starts_with("///")
            || candidate.starts_with("//!")
            || candidate.starts_with("//")
            || candidate.starts_with("/**")
            || candidate.starts_with('*')
            || candidate.starts_with("#")
            || candidate.starts_with("\"\"\"")
            || candidate.starts_with("'''")
            || candidate.starts_with("@");
        if is_doc {
            cursor -= 1;
        } else if candidate.is_empty() {
            break;
        } else {
            break;
        }
    }
    cursor
}

fn adaptive_max_chars(complexity: u32) -> usize {
    if complexity <= 5 {
        CHUNK_SIZE_SIMPLE
    } else if complexity <= 15 {
        CHUNK_SIZE_MODERATE
    } else {
        CHUNK_SIZE_COMPLEX
    }
}

fn estimate_complexity(node: &Node) -> u32 {
    let mut complexity = 1u32;
    let mut cursor = node.walk();
    visit_for_complexity(node, &mut cursor, &mut complexity);
    complexity
}

fn visit_for_complexity(node: &Node, cursor: &mut TreeCursor, complexity: &mut u32) {
    match node.kind() {
        "if_statement" | "if_expression" | "for_statement" | "for_expression" | "while_statement"
        | "while_expression" | "catch_clause" | "conditional_expression" | "guard_statement" => {
            *complexity += 1;
        }
        "switch_statement" | "match_expression" | "switch_expression" => {
            *complexity += 2;
        }
        _ => {}
    }
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            visit_for_complexity(&child, cursor, complexity);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

fn extract_name(node: &Node, content: &str) -> Option<String> {
    for field in ["name", "declarator"] {
        if let Some(child) = node.child_by_field_name(field) {
            let text = child.utf8_text(content.as_bytes()).ok()?;
            let first_ident: String = text
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if !first_ident.is_empty() {
                return Some(first_ident);
            }
        }
    }
    None
}

fn symbol_type_for(kind: &str) -> SymbolType {
    match kind {
        k if k.contains("function") || k.contains("method") => SymbolType::Function,
        k if k.contains("class") || k.contains("struct") || k.contains("impl") => SymbolType::Class,
        k if k.contains("interface") || k.contains("trait") || k.contains("type") => SymbolType::Type,
        k if k.contains("enum") => SymbolType::Enum,
        k if k.contains("mod") || k.contains("namespace") || k.contains("package") => SymbolType::Module,
        k if k.contains("const") || k.contains("static") || k.contains("variable") || k.contains("let") => {
            SymbolType::Variable
        }
        _ => SymbolType::Function,
    }
}

fn is_exported(node: &Node, content: &str, language: &Language) -> bool {
    let text = node.utf8_text(content.as_bytes()).unwrap_or("");
    match language.as_str() {
        "rust" => text.trim_start().starts_with("pub "),
        "python" => extract_name(node, content)
            .map(|name| !name.starts_with('_'))
            .unwrap_or(true),
        "javascript" | "typescript" => text.contains("export "),
        "go" => extract_name(node, content)
            .map(|name| name.chars().next().map(char::is_uppercase).unwrap_or(false))
            .unwrap_or(false),
        "java" | "c" | "cpp" => text.contains("public "),
        _ => true,
    }
}

fn extract_keywords(body: &str) -> Vec<String> {
    let mut calls: Vec<String> = Vec::new();
    for cap in CALL_NAME_RE.captures_iter(body) {
        let name = cap[1].to_string();
        if CALL_STOPWORDS.contains(&name.as_str()) || calls.contains(&name) {
            continue;
        }
        calls.push(name);
        if calls.len() >= 5 {
            break;
        }
    }

    let mut types: Vec<String> = Vec::new();
    for cap in TYPE_NAME_RE.captures_iter(body) {
        let name = cap[1].to_string();
        if types.contains(&name) {
            continue;
        }
        types.push(name);
        if types.len() >= 5 {
            break;
        }
    }

    calls.into_iter().chain(types).collect()
}

fn split_node_children(node: &Node, lines: &[&str], max_chars: usize) -> Vec<(usize, usize)> {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    let mut group_start = node.start_position().row;
    let mut group_end = group_start;

    loop {
        let child = cursor.node();
        let child_start = child.start_position().row;
        let child_end = child.end_position().row.min(lines.len().saturating_sub(1));

        let candidate_len: usize = lines[group_start..=child_end.max(group_end)]
            .iter()
            .map(|l| l.len() + 1)
            .sum();
        if candidate_len > max_chars && group_end > group_start {
            pieces.push((group_start, group_end));
            group_start = child_start;
        }
        group_end = child_end;

        if !cursor.goto_next_sibling() {
            break;
        }
    }
    pieces.push((group_start, group_end.max(node.end_position().row.min(lines.len().saturating_sub(1)))));
    pieces
}

fn split_lines(start: usize, end: usize, lines: &[&str], max_chars: usize) -> Vec<(usize, usize)> {
    let mut pieces = Vec::new();
    let mut chunk_start = start;
    let mut running = 0usize;

    for (offset, line) in lines[start..=end].iter().enumerate() {
        running += line.len() + 1;
        if running > max_chars {
            let line_no = start + offset;
            pieces.push((chunk_start, line_no.max(chunk_start)));
            chunk_start = line_no + 1;
            running = 0;
        }
    }
    if chunk_start <= end {
        pieces.push((chunk_start, end));
    }
    pieces
}
