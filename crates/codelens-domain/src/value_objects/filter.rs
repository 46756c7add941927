//! Structural filter AST
//!
//! A typed predicate over the scalar columns of the embedding table row
//! schema (`symbolType`, `language`, `complexity`, `isExported`, …). The
//! filter compiler (infrastructure/providers boundary) turns this into a
//! backend-specific predicate string; the domain only defines its shape and
//! the key-safety invariant every compiler must honor.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A scalar value a [`Filter`] compares a column against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string literal, single-quote-escaped by the compiler
    String(String),
    /// A numeric literal, rendered unquoted
    Number(f64),
    /// A boolean literal, rendered as `true`/`false`
    Bool(bool),
    /// An array, only meaningful with `In`/`NotIn`
    List(Vec<FilterValue>),
}

/// Comparison operator of a single [`Filter`] clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// Substring match
    Contains,
    /// Prefix match
    StartsWith,
    /// Suffix match
    EndsWith,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// Set membership; an empty array disables the clause
    In,
    /// Negated set membership; an empty array disables the clause
    NotIn,
}

/// A single structural predicate: `key <op> value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Column name; must match [`Filter::KEY_PATTERN`] or the clause is
    /// dropped by the compiler with a warning, never forwarded to the backend
    pub key: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Comparison value
    pub value: FilterValue,
}

static KEY_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid regex"));

impl Filter {
    /// The identifier pattern a filter key must match to be compiled.
    pub const KEY_PATTERN: &'static str = r"^[a-zA-Z_][a-zA-Z0-9_]*$";

    /// Whether `key` is safe to interpolate into a backend predicate.
    pub fn is_key_safe(key: &str) -> bool {
        KEY_REGEX.is_match(key)
    }

    /// Whether this clause is safe to compile as written.
    pub fn is_safe(&self) -> bool {
        Self::is_key_safe(&self.key)
    }
}

/// A group of filters combined as `ALL AND ANY AND NOT(any of none)`.
///
/// An empty group (all three lists empty) compiles to "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    /// Every clause here must hold
    #[serde(default)]
    pub all: Vec<Filter>,
    /// At least one clause here must hold, when non-empty
    #[serde(default)]
    pub any: Vec<Filter>,
    /// No clause here may hold
    #[serde(default)]
    pub none: Vec<Filter>,
}

impl FilterGroup {
    /// An unrestricted filter group (matches everything).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this group has no clauses at all.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty() && self.none.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_with_leading_digit() {
        assert!(!Filter::is_key_safe("1symbol"));
    }

    #[test]
    fn rejects_keys_with_punctuation() {
        assert!(!Filter::is_key_safe("symbol; DROP TABLE x"));
    }

    #[test]
    fn accepts_identifier_keys() {
        assert!(Filter::is_key_safe("symbol_type"));
        assert!(Filter::is_key_safe("_private"));
    }

    #[test]
    fn empty_group_has_no_clauses() {
        assert!(FilterGroup::empty().is_empty());
    }
}
