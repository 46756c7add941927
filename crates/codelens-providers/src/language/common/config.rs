//! Per-language tree-sitter configuration: which node kinds are chunk
//! boundaries, and the fallback regexes used when parsing fails.

use super::constants::CHUNK_SIZE_GENERIC;

/// One tier of tree-sitter node kinds to extract as chunk boundaries.
///
/// Processors declare several rules at different priorities (functions and
/// types ranked above module-level `use`/`const` declarations, for example)
/// so the traverser can keep the highest-value chunks when a file produces
/// more boundaries than the per-file chunk cap allows.
#[derive(Debug, Clone)]
pub struct NodeExtractionRule {
    /// Tree-sitter node kind names this rule matches.
    pub node_types: Vec<String>,
    /// Minimum character length for a matched node to be emitted as its own chunk.
    pub min_length: usize,
    /// Minimum line count for a matched node to be emitted as its own chunk.
    pub min_lines: usize,
    /// Maximum descent depth from the file's root the traverser will walk
    /// looking for this rule's node kinds.
    pub max_depth: usize,
    /// Relative importance when trimming to the per-file chunk cap; higher
    /// survives first.
    pub priority: i64,
    /// Whether to attach the relevant-imports/keyword context header.
    pub include_context: bool,
}

impl NodeExtractionRule {
    fn tier(node_types: &[&str], priority: i64) -> Self {
        Self {
            node_types: node_types.iter().map(|s| s.to_string()).collect(),
            min_length: 20,
            min_lines: 1,
            max_depth: 3,
            priority,
            include_context: true,
        }
    }

    /// Top-priority boundary kinds: functions, types, classes.
    pub fn primary(node_types: &[&str]) -> Self {
        Self::tier(node_types, 10)
    }

    /// Mid-priority boundary kinds: nested modules, macros, top-level consts.
    pub fn secondary(node_types: &[&str]) -> Self {
        Self::tier(node_types, 5)
    }

    /// Low-priority boundary kinds: type aliases, import statements.
    pub fn tertiary(node_types: &[&str]) -> Self {
        Self::tier(node_types, 1)
    }
}

/// Builder for [`NodeExtractionRule`] when the tier shortcuts don't fit.
#[derive(Debug, Clone)]
pub struct NodeExtractionRuleBuilder {
    rule: NodeExtractionRule,
}

impl NodeExtractionRuleBuilder {
    pub fn new(node_types: &[&str]) -> Self {
        Self {
            rule: NodeExtractionRule::tier(node_types, 5),
        }
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.rule.min_length = value;
        self
    }

    pub fn min_lines(mut self, value: usize) -> Self {
        self.rule.min_lines = value;
        self
    }

    pub fn max_depth(mut self, value: usize) -> Self {
        self.rule.max_depth = value;
        self
    }

    pub fn priority(mut self, value: i64) -> Self {
        self.rule.priority = value;
        self
    }

    pub fn include_context(mut self, value: bool) -> Self {
        self.rule.include_context = value;
        self
    }

    pub fn build(self) -> NodeExtractionRule {
        self.rule
    }
}

/// Everything a [`super::processor::BaseProcessor`] needs to chunk one language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    language: tree_sitter::Language,
    /// Node-kind rules in priority order as supplied by the processor.
    pub extraction_rules: Vec<NodeExtractionRule>,
    /// Line-prefix regexes used when tree-sitter parsing fails.
    pub fallback_patterns: Vec<String>,
    /// Base target chunk size in characters, narrowed by complexity at
    /// traversal time.
    pub chunk_size: usize,
}

impl LanguageConfig {
    pub fn new(language: tree_sitter::Language) -> Self {
        Self {
            language,
            extraction_rules: Vec::new(),
            fallback_patterns: Vec::new(),
            chunk_size: CHUNK_SIZE_GENERIC,
        }
    }

    pub fn with_rules(mut self, rules: Vec<NodeExtractionRule>) -> Self {
        self.extraction_rules = rules;
        self
    }

    pub fn with_fallback_patterns(mut self, patterns: Vec<String>) -> Self {
        self.fallback_patterns = patterns;
        self
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub fn get_language(&self) -> tree_sitter::Language {
        self.language.clone()
    }
}
