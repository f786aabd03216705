//! The per-language descriptor consumed by the generic metrics engine.
//!
//! Each supported language is a data value: node-kind tables for the
//! metric walkers plus a handful of function-pointer hooks for the
//! genuinely irregular constructs (receiver-qualified Go names, C/C++
//! declarator descent, parent-based naming of JavaScript lambdas, and so
//! on). The engine in [`crate::lang::engine`] interprets these tables
//! identically for all twelve families.

use tree_sitter::{Language, Node};

/// Language-flavored wording for the five table-driven refactoring rules.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionCatalog {
    /// Title for the cyclomatic rule (`C > 15`, high priority).
    pub extract_title: &'static str,
    /// Description for the cyclomatic rule.
    pub extract: &'static str,
    /// Description for the nesting rule (`N > 3`, high priority).
    pub nesting: &'static str,
    /// Title for the parameter rule (medium priority).
    pub params_title: &'static str,
    /// Description for the parameter rule.
    pub params: &'static str,
    /// Title for the length rule (`LOC > 50`, high priority).
    pub too_long_title: &'static str,
    /// Description for the length rule.
    pub too_long: &'static str,
    /// Description for the cognitive rule (`K > 20`, medium priority).
    pub simplify: &'static str,
}

/// Extra metric increments contributed by a single node, on top of the
/// table-driven counts: `(cyclomatic, cognitive)`.
pub type NodeIncrement = (u32, u32);

/// Descriptor for one language family.
///
/// Kind tables hold grammar node-type strings; a string that a given
/// grammar version never produces simply never matches. Operator tables
/// hold anonymous token kinds (`"&&"`, `"||"`, `"and"`, ...), which
/// tree-sitter exposes as the token text itself.
pub struct LanguageProfile {
    /// Language tag stamped on every metric (e.g. "Go", "C/C++").
    pub name: &'static str,
    /// Short registry key (e.g. "go", "cpp").
    pub key: &'static str,
    /// Supported file extensions, lowercase, without leading dots.
    pub extensions: &'static [&'static str],
    /// Grammar constructor; receives the (lowercase) file extension so
    /// multi-grammar families like TypeScript/TSX can pick a dialect.
    pub grammar: fn(ext: &str) -> Language,

    /// Node kinds that denote a function-like construct.
    pub function_kinds: &'static [&'static str],
    /// Node kinds searched for the function name when the grammar has no
    /// `name` field on the function node.
    pub name_kinds: &'static [&'static str],
    /// Node kinds accepted as the function body when the grammar has no
    /// `body` field.
    pub body_kinds: &'static [&'static str],

    /// Node kinds that add one to cyclomatic complexity.
    pub branch_kinds: &'static [&'static str],
    /// Anonymous operator tokens that add one to cyclomatic complexity
    /// and one to cognitive complexity per occurrence.
    pub operator_tokens: &'static [&'static str],
    /// Node kinds that add two to cognitive complexity.
    pub cognitive_kinds: &'static [&'static str],
    /// Additional `(kind, weight)` cognitive penalties.
    pub cognitive_penalties: &'static [(&'static str, u32)],
    /// Node kinds that open one nesting level.
    pub nesting_kinds: &'static [&'static str],

    /// Direct children of the parameter clause counted as one parameter.
    pub param_kinds: &'static [&'static str],
    /// Parameter count above which the parameter-object suggestion fires.
    pub param_threshold: u32,
    /// Fixed review-overhead minutes added to every debt estimate.
    pub debt_tax: u32,
    /// Whether this language computes cognitive complexity.
    pub has_cognitive: bool,

    /// Suggestion wording for this language.
    pub suggestions: SuggestionCatalog,

    /// Overrides the default name extraction (`name` field, then
    /// `name_kinds`). Returning `None` skips the function.
    pub name_hook: Option<fn(Node, &str) -> Option<String>>,
    /// Overrides the default body lookup (`body` field, then
    /// `body_kinds`). Returning `None` skips the function.
    pub body_hook: Option<fn(Node) -> Option<Node>>,
    /// Overrides the default parameter counting.
    pub param_hook: Option<fn(Node, &str) -> u32>,
    /// Per-node metric increments beyond the tables (e.g. Kotlin scope
    /// calls, Swift `try?`).
    pub increment_hook: Option<fn(Node, &str) -> NodeIncrement>,
}

impl LanguageProfile {
    /// Whether a lowercase extension belongs to this profile.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl std::fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}
