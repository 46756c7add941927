//! Shared filter predicate evaluation for in-process vector store backends.
//!
//! Backends that can't push `FilterGroup` down into a query language (memory,
//! filesystem) instead store full rows and evaluate predicates here. This is
//! the Rust-side mirror of the embedding table row schema's scalar columns.

use codelens_domain::entities::{ChunkKind, CodeChunk, SymbolType};
use codelens_domain::value_objects::{Filter, FilterGroup, FilterOp, FilterValue, SearchResult};
use serde::{Deserialize, Serialize};

/// A persisted vector store row: a chunk plus its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRow {
    pub chunk: CodeChunk,
    pub vector: Vec<f32>,
}

impl StoredRow {
    pub fn new(chunk: CodeChunk, vector: Vec<f32>) -> Self {
        Self { chunk, vector }
    }

    pub fn into_search_result(self, score: Option<f64>) -> SearchResult {
        to_search_result(&self.chunk, self.vector, score)
    }
}

/// Build a [`SearchResult`] from a stored chunk and its vector.
pub fn to_search_result(chunk: &CodeChunk, vector: Vec<f32>, score: Option<f64>) -> SearchResult {
    SearchResult {
        id: chunk.id.clone(),
        file_path: chunk.file_path.clone(),
        start_line: chunk.start_line,
        end_line: chunk.end_line,
        chunk_index: chunk.chunk_index,
        content: chunk.content.clone(),
        content_raw: chunk.content_raw.clone(),
        chunk_type: chunk.chunk_type,
        score,
        vector,
        language: chunk.language.clone(),
        symbol_name: chunk.meta.symbol_name.clone(),
        symbol_type: chunk.meta.symbol_type,
        complexity: chunk.meta.complexity,
        is_exported: chunk.meta.is_exported,
        parent_scope: chunk.meta.parent_scope.clone(),
    }
}

/// Whether `chunk` satisfies `group`. An empty group matches everything.
pub fn matches(chunk: &CodeChunk, group: &FilterGroup) -> bool {
    if group.is_empty() {
        return true;
    }
    let all_ok = group.all.iter().all(|f| eval_clause(chunk, f));
    let any_ok = group.any.is_empty() || group.any.iter().any(|f| eval_clause(chunk, f));
    let none_ok = !group.none.iter().any(|f| eval_clause(chunk, f));
    all_ok && any_ok && none_ok
}

fn eval_clause(chunk: &CodeChunk, filter: &Filter) -> bool {
    if !filter.is_safe() {
        return true;
    }
    match column_value(chunk, &filter.key) {
        Some(value) => eval_op(&value, filter.op, &filter.value),
        None => false,
    }
}

/// Map a column name from the embedding table row schema onto the matching
/// scalar field of a stored chunk.
fn column_value(chunk: &CodeChunk, key: &str) -> Option<FilterValue> {
    Some(match key {
        "id" => FilterValue::String(chunk.id.clone()),
        "file" | "filePath" | "file_path" => FilterValue::String(chunk.file_path.clone()),
        "startLine" | "start_line" => FilterValue::Number(chunk.start_line as f64),
        "endLine" | "end_line" => FilterValue::Number(chunk.end_line as f64),
        "chunkIndex" | "chunk_index" => FilterValue::Number(chunk.chunk_index as f64),
        "type" | "chunkType" | "chunk_type" => {
            FilterValue::String(chunk_kind_str(chunk.chunk_type).to_string())
        }
        "language" => FilterValue::String(chunk.language.clone()),
        "symbolName" | "symbol_name" => {
            FilterValue::String(chunk.meta.symbol_name.clone().unwrap_or_default())
        }
        "symbolType" | "symbol_type" => FilterValue::String(
            chunk
                .meta
                .symbol_type
                .map(symbol_type_str)
                .unwrap_or("")
                .to_string(),
        ),
        "variant" => FilterValue::String(chunk.meta.variant.clone().unwrap_or_default()),
        "complexity" => FilterValue::Number(chunk.meta.complexity as f64),
        "isExported" | "is_exported" => FilterValue::Bool(chunk.meta.is_exported),
        "isAsync" | "is_async" => FilterValue::Bool(chunk.meta.is_async),
        "isStatic" | "is_static" => FilterValue::Bool(chunk.meta.is_static),
        "isAbstract" | "is_abstract" => FilterValue::Bool(chunk.meta.is_abstract),
        "hasDocumentation" | "has_documentation" => {
            FilterValue::Bool(chunk.meta.has_documentation)
        }
        "parentScope" | "parent_scope" => {
            FilterValue::String(chunk.meta.parent_scope.clone().unwrap_or_default())
        }
        "scopeDepth" | "scope_depth" => {
            FilterValue::Number(chunk.meta.scope_depth.unwrap_or(0) as f64)
        }
        "decorators" => FilterValue::String(chunk.meta.decorators.join(",")),
        _ => return None,
    })
}

fn chunk_kind_str(kind: ChunkKind) -> &'static str {
    match kind {
        ChunkKind::Code => "code",
        ChunkKind::Text => "text",
    }
}

fn symbol_type_str(symbol_type: SymbolType) -> &'static str {
    match symbol_type {
        SymbolType::Function => "function",
        SymbolType::Class => "class",
        SymbolType::Method => "method",
        SymbolType::Type => "type",
        SymbolType::Variable => "variable",
        SymbolType::Enum => "enum",
        SymbolType::Module => "module",
    }
}

fn eval_op(column: &FilterValue, op: FilterOp, target: &FilterValue) -> bool {
    match op {
        FilterOp::Equals => values_eq(column, target),
        FilterOp::NotEquals => !values_eq(column, target),
        FilterOp::Contains => as_str(column)
            .zip(as_str(target))
            .is_some_and(|(c, t)| c.contains(t)),
        FilterOp::StartsWith => as_str(column)
            .zip(as_str(target))
            .is_some_and(|(c, t)| c.starts_with(t)),
        FilterOp::EndsWith => as_str(column)
            .zip(as_str(target))
            .is_some_and(|(c, t)| c.ends_with(t)),
        FilterOp::GreaterThan => compare_numbers(column, target).is_some_and(|o| o.is_gt()),
        FilterOp::LessThan => compare_numbers(column, target).is_some_and(|o| o.is_lt()),
        FilterOp::GreaterOrEqual => compare_numbers(column, target).is_some_and(|o| o.is_ge()),
        FilterOp::LessOrEqual => compare_numbers(column, target).is_some_and(|o| o.is_le()),
        FilterOp::In => match target {
            FilterValue::List(items) => items.is_empty() || items.iter().any(|v| values_eq(column, v)),
            _ => values_eq(column, target),
        },
        FilterOp::NotIn => match target {
            FilterValue::List(items) => items.is_empty() || !items.iter().any(|v| values_eq(column, v)),
            _ => !values_eq(column, target),
        },
    }
}

fn values_eq(a: &FilterValue, b: &FilterValue) -> bool {
    match (a, b) {
        (FilterValue::String(a), FilterValue::String(b)) => a == b,
        (FilterValue::Number(a), FilterValue::Number(b)) => a == b,
        (FilterValue::Bool(a), FilterValue::Bool(b)) => a == b,
        (FilterValue::List(a), FilterValue::List(b)) => a == b,
        _ => false,
    }
}

fn as_str(value: &FilterValue) -> Option<&str> {
    match value {
        FilterValue::String(s) => Some(s.as_str()),
        _ => None,
    }
}

fn compare_numbers(a: &FilterValue, b: &FilterValue) -> Option<std::cmp::Ordering> {
    match (a, b) {
        (FilterValue::Number(a), FilterValue::Number(b)) => a.partial_cmp(b),
        _ => None,
    }
}

/// Cosine similarity in `[-1, 1]`, used to derive `score = similarity` since
/// `1 - distance` and cosine similarity coincide for normalized distance.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelens_domain::entities::ChunkMeta;

    fn chunk(symbol_type: SymbolType, is_exported: bool, complexity: u32) -> CodeChunk {
        CodeChunk {
            id: "a.rs:0".to_string(),
            content: "fn a(){}".to_string(),
            content_raw: "fn a(){}".to_string(),
            hash: "h".to_string(),
            file_path: "a.rs".to_string(),
            start_line: 1,
            end_line: 1,
            chunk_index: 0,
            chunk_type: ChunkKind::Code,
            language: "rust".to_string(),
            meta: ChunkMeta {
                symbol_type: Some(symbol_type),
                is_exported,
                complexity,
                ..ChunkMeta::bare("rust".to_string())
            },
        }
    }

    #[test]
    fn empty_group_matches_everything() {
        let c = chunk(SymbolType::Function, false, 0);
        assert!(matches(&c, &FilterGroup::empty()));
    }

    #[test]
    fn equals_on_symbol_type() {
        let c = chunk(SymbolType::Method, true, 3);
        let group = FilterGroup {
            all: vec![Filter {
                key: "symbolType".to_string(),
                op: FilterOp::Equals,
                value: FilterValue::String("method".to_string()),
            }],
            ..Default::default()
        };
        assert!(matches(&c, &group));
    }

    #[test]
    fn greater_than_on_complexity() {
        let c = chunk(SymbolType::Function, true, 10);
        let group = FilterGroup {
            all: vec![Filter {
                key: "complexity".to_string(),
                op: FilterOp::GreaterThan,
                value: FilterValue::Number(5.0),
            }],
            ..Default::default()
        };
        assert!(matches(&c, &group));
    }

    #[test]
    fn unsafe_key_is_ignored() {
        let c = chunk(SymbolType::Function, false, 0);
        let group = FilterGroup {
            all: vec![Filter {
                key: "symbol; DROP TABLE x".to_string(),
                op: FilterOp::Equals,
                value: FilterValue::String("anything".to_string()),
            }],
            ..Default::default()
        };
        assert!(matches(&c, &group));
    }

    #[test]
    fn none_clause_excludes_match() {
        let c = chunk(SymbolType::Function, false, 0);
        let group = FilterGroup {
            none: vec![Filter {
                key: "isExported".to_string(),
                op: FilterOp::Equals,
                value: FilterValue::Bool(false),
            }],
            ..Default::default()
        };
        assert!(!matches(&c, &group));
    }
}
