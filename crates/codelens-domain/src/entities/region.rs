//! Collapsible regions — AST ranges a downstream renderer may hide
//!
//! Computed once during indexing and persisted in the sidecar so consumers
//! never reparse just to find fold points.

use serde::{Deserialize, Serialize};

/// The shape of a collapsible region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// A method body
    Method,
    /// A free function body
    Function,
    /// A constructor body
    Constructor,
    /// An arrow/lambda function body
    Arrow,
}

/// A single foldable AST range within a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollapsibleRegion {
    /// What kind of construct this region folds
    pub kind: RegionKind,
    /// Symbol name, when recoverable
    pub name: String,
    /// 1-indexed, inclusive start line
    pub start_line: u32,
    /// 1-indexed, inclusive end line
    pub end_line: u32,
    /// Last line of the signature: the line before `{` for brace languages,
    /// the line of the trailing `:` for Python, or `start_line` for one-liners
    pub signature_end_line: u32,
    /// Leading whitespace width of the signature line, for renderer alignment
    pub indentation: u32,
}
