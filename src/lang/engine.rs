//! The generic function-metrics engine.
//!
//! One pipeline serves all twelve language families: parse the file,
//! locate function-like nodes, extract name/parameters/body, run the
//! metric walkers over the body subtree, then classify severity and
//! estimate debt. Per-language behavior comes entirely from the
//! [`LanguageProfile`] tables and hooks.
//!
//! The parse tree, the source buffer, and any text borrowed from it share
//! one scope: everything extracted (names, snippets) is copied into owned
//! strings before the tree is dropped at the end of the call.

use tracing::{debug, warn};
use tree_sitter::Node;
use uuid::Uuid;

use crate::core::metrics::{ComplexityMetric, RefactoringSuggestion};
use crate::core::thresholds::{classify_severity, estimate_debt_minutes};
use crate::lang::ast::{find_child_by_kinds, node_text, truncate_snippet, walk};
use crate::lang::profile::LanguageProfile;
use crate::lang::registry::create_parser;

/// Maximum bytes of function body carried on a metric.
const SNIPPET_MAX_BYTES: usize = 300;

/// Analyze one source file with the given profile.
///
/// Parse failures are not fatal: they are logged and yield an empty
/// result, so one malformed file never affects the rest of the scan.
/// Function-like nodes without a body (declarations, abstract methods)
/// are skipped.
pub fn analyze_file(
    profile: &LanguageProfile,
    file_path: &str,
    ext: &str,
    source: &str,
) -> Vec<ComplexityMetric> {
    let mut parser = match create_parser(profile, ext) {
        Ok(parser) => parser,
        Err(err) => {
            warn!("Failed to build {} parser: {err}", profile.name);
            return Vec::new();
        }
    };

    let Some(tree) = parser.parse(source, None) else {
        warn!("Failed to parse {file_path} as {}", profile.name);
        return Vec::new();
    };

    let mut function_nodes = Vec::new();
    walk(tree.root_node(), &mut |node| {
        if profile.function_kinds.contains(&node.kind()) {
            function_nodes.push(node);
        }
    });

    let mut metrics = Vec::new();
    for node in function_nodes {
        if let Some(metric) = analyze_function(profile, file_path, source, node) {
            metrics.push(metric);
        }
    }

    debug!(
        "Analyzed {file_path}: {} function(s) as {}",
        metrics.len(),
        profile.name
    );
    metrics
}

/// Compute the full metric record for one function node, or `None` when
/// the node has no resolvable name or body.
fn analyze_function(
    profile: &LanguageProfile,
    file_path: &str,
    source: &str,
    node: Node,
) -> Option<ComplexityMetric> {
    let name = function_name(profile, node, source)?;
    let body = function_body(profile, node)?;

    let (cyclomatic, cognitive) = complexity_of(profile, body, source);
    let nesting = nesting_depth(profile, body);
    let parameters = parameter_count(profile, node, source);

    let start_line = node.start_position().row + 1;
    let end_line = node.end_position().row + 1;
    let lines_of_code = end_line - start_line + 1;

    let severity = classify_severity(cyclomatic, cognitive, nesting);
    let debt_minutes = estimate_debt_minutes(
        cyclomatic,
        cognitive,
        lines_of_code as u32,
        profile.debt_tax,
    );
    let suggestions = suggestions_for(profile, cyclomatic, cognitive, nesting, parameters, lines_of_code);
    let snippet = truncate_snippet(node_text(body, source), SNIPPET_MAX_BYTES);

    Some(ComplexityMetric {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        repository_id: Uuid::nil(),
        analysis_run_id: Uuid::nil(),
        file_path: file_path.to_string(),
        function_name: name,
        start_line,
        end_line,
        cyclomatic_complexity: cyclomatic,
        cognitive_complexity: profile.has_cognitive.then_some(cognitive),
        nesting_depth: nesting,
        parameter_count: parameters,
        lines_of_code,
        severity,
        technical_debt_minutes: debt_minutes,
        code_snippet: Some(snippet),
        refactoring_suggestions: suggestions,
        language: profile.name,
    })
}

/// Resolve the function's display name via hook, `name` field, or the
/// profile's fallback kind list.
fn function_name(profile: &LanguageProfile, node: Node, source: &str) -> Option<String> {
    if let Some(hook) = profile.name_hook {
        return hook(node, source);
    }

    node.child_by_field_name("name")
        .or_else(|| find_child_by_kinds(node, profile.name_kinds))
        .map(|n| node_text(n, source).to_string())
}

/// Resolve the body node via hook, `body` field, or the profile's
/// fallback kind list.
fn function_body<'a>(profile: &LanguageProfile, node: Node<'a>) -> Option<Node<'a>> {
    if let Some(hook) = profile.body_hook {
        return hook(node);
    }

    node.child_by_field_name("body")
        .or_else(|| find_child_by_kinds(node, profile.body_kinds))
}

/// One pass over the body subtree computing cyclomatic (starting at 1)
/// and cognitive (starting at 0) together.
fn complexity_of(profile: &LanguageProfile, body: Node, source: &str) -> (u32, u32) {
    let mut cyclomatic = 1u32;
    let mut cognitive = 0u32;

    walk(body, &mut |node| {
        let kind = node.kind();

        if profile.branch_kinds.contains(&kind) {
            cyclomatic += 1;
        }
        if profile.operator_tokens.contains(&kind) {
            cyclomatic += 1;
            cognitive += 1;
        }
        if profile.cognitive_kinds.contains(&kind) {
            cognitive += 2;
        }
        for (penalty_kind, weight) in profile.cognitive_penalties {
            if kind == *penalty_kind {
                cognitive += weight;
            }
        }
        if let Some(hook) = profile.increment_hook {
            let (extra_cyclomatic, extra_cognitive) = hook(node, source);
            cyclomatic += extra_cyclomatic;
            cognitive += extra_cognitive;
        }
    });

    (cyclomatic, cognitive)
}

/// Maximum number of simultaneously open control-flow constructs on any
/// path through the body. Computed from the parse tree, never from
/// brace counting, so brace-free languages behave identically.
fn nesting_depth(profile: &LanguageProfile, body: Node) -> u32 {
    let mut max_depth = 0u32;
    let mut stack: Vec<(Node, u32)> = vec![(body, 0)];

    while let Some((node, depth)) = stack.pop() {
        let depth = if profile.nesting_kinds.contains(&node.kind()) {
            let opened = depth + 1;
            max_depth = max_depth.max(opened);
            opened
        } else {
            depth
        };

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            stack.push((child, depth));
        }
    }

    max_depth
}

/// Count parameters via hook or the default rule: direct children of the
/// parameter clause whose kind is in the profile's table.
fn parameter_count(profile: &LanguageProfile, node: Node, source: &str) -> u32 {
    if let Some(hook) = profile.param_hook {
        return hook(node, source);
    }

    let params = node
        .child_by_field_name("parameters")
        .or_else(|| find_child_by_kinds(node, PARAM_CONTAINER_KINDS));
    let Some(params) = params else {
        return 0;
    };

    let mut count = 0u32;
    let mut cursor = params.walk();
    for child in params.children(&mut cursor) {
        if profile.param_kinds.contains(&child.kind()) {
            count += 1;
        }
    }
    count
}

/// Parameter-clause node kinds across the supported grammars, used when
/// the function node has no `parameters` field.
const PARAM_CONTAINER_KINDS: &[&str] = &[
    "formal_parameters",
    "parameters",
    "parameter_list",
    "method_parameters",
    "function_value_parameters",
];

/// Deterministic, table-driven refactoring suggestions.
fn suggestions_for(
    profile: &LanguageProfile,
    cyclomatic: u32,
    cognitive: u32,
    nesting: u32,
    parameters: u32,
    lines_of_code: usize,
) -> Vec<RefactoringSuggestion> {
    let texts = &profile.suggestions;
    let mut suggestions = Vec::new();

    if cyclomatic > 15 {
        suggestions.push(RefactoringSuggestion {
            priority: "high",
            title: texts.extract_title,
            description: texts.extract,
        });
    }

    if nesting > 3 {
        suggestions.push(RefactoringSuggestion {
            priority: "high",
            title: "Reduce Nesting Depth",
            description: texts.nesting,
        });
    }

    if parameters > profile.param_threshold {
        suggestions.push(RefactoringSuggestion {
            priority: "medium",
            title: texts.params_title,
            description: texts.params,
        });
    }

    if lines_of_code > 50 {
        suggestions.push(RefactoringSuggestion {
            priority: "high",
            title: texts.too_long_title,
            description: texts.too_long,
        });
    }

    if cognitive > 20 {
        suggestions.push(RefactoringSuggestion {
            priority: "medium",
            title: "Simplify Logic",
            description: texts.simplify,
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::profiles::{GO, PYTHON, RUST};

    fn analyze(profile: &LanguageProfile, ext: &str, source: &str) -> Vec<ComplexityMetric> {
        analyze_file(profile, "test_input", ext, source)
    }

    #[test]
    fn straight_line_function_has_baseline_metrics() {
        let metrics = analyze(&PYTHON, "py", "def add(a, b):\n    return a + b\n");
        assert_eq!(metrics.len(), 1);
        let m = &metrics[0];
        assert_eq!(m.cyclomatic_complexity, 1);
        assert_eq!(m.cognitive_complexity, Some(0));
        assert_eq!(m.nesting_depth, 0);
    }

    #[test]
    fn empty_file_produces_no_metrics() {
        assert!(analyze(&PYTHON, "py", "").is_empty());
        assert!(analyze(&GO, "go", "").is_empty());
    }

    #[test]
    fn malformed_input_is_not_fatal() {
        let metrics = analyze(&RUST, "rs", "fn broken( {{{{ ::: ");
        // Parse errors yield an empty or partial result, never a panic
        assert!(metrics.len() <= 1);
    }

    #[test]
    fn metrics_satisfy_the_core_invariants() {
        let source = r#"
fn decide(a: i32, b: i32) -> i32 {
    if a > 0 {
        if b > 0 {
            return a + b;
        }
    }
    a - b
}
"#;
        for m in analyze(&RUST, "rs", source) {
            assert!(m.start_line <= m.end_line);
            assert!(m.cyclomatic_complexity >= 1);
            assert_eq!(m.lines_of_code, m.end_line - m.start_line + 1);
            assert!(m.technical_debt_minutes >= 5);
        }
    }

    #[test]
    fn suggestions_follow_the_rule_table() {
        let none = suggestions_for(&RUST, 1, 0, 0, 1, 10);
        assert!(none.is_empty());

        let all = suggestions_for(&RUST, 16, 21, 4, 5, 51);
        let titles: Vec<_> = all.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Extract Functions",
                "Reduce Nesting Depth",
                "Consider Builder Pattern or Struct",
                "Function Too Long",
                "Simplify Logic",
            ]
        );
        assert_eq!(all[0].priority, "high");
        assert_eq!(all[2].priority, "medium");
    }

    #[test]
    fn cpp_parameter_rule_keeps_the_higher_threshold() {
        use crate::lang::profiles::C_CPP;
        let five = suggestions_for(&C_CPP, 1, 0, 0, 5, 10);
        assert!(five.is_empty());
        let six = suggestions_for(&C_CPP, 1, 0, 0, 6, 10);
        assert_eq!(six.len(), 1);
        assert_eq!(six[0].title, "Too Many Parameters");
    }

    #[test]
    fn snippets_are_capped_with_marker() {
        let mut body = String::from("def much(a):\n");
        for i in 0..60 {
            body.push_str(&format!("    x{i} = {i}\n"));
        }
        let metrics = analyze(&PYTHON, "py", &body);
        assert_eq!(metrics.len(), 1);
        let snippet = metrics[0].code_snippet.as_deref().unwrap();
        assert!(snippet.len() <= SNIPPET_MAX_BYTES + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn metrics_follow_traversal_order_within_a_file() {
        let source = r#"
def first():
    return 1

def second():
    return 2

def third():
    return 3
"#;
        let metrics = analyze(&PYTHON, "py", source);
        let names: Vec<_> = metrics.iter().map(|m| m.function_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(metrics.windows(2).all(|w| w[0].start_line < w[1].start_line));
    }

    #[test]
    fn analysis_is_idempotent() {
        let source = r#"
fn route(kind: u8) -> &'static str {
    match kind {
        0 => "a",
        1 => "b",
        _ => "c",
    }
}
"#;
        let first: Vec<_> = analyze(&RUST, "rs", source)
            .into_iter()
            .map(|m| m.fingerprint())
            .collect();
        let second: Vec<_> = analyze(&RUST, "rs", source)
            .into_iter()
            .map(|m| m.fingerprint())
            .collect();
        assert_eq!(first, second);
    }
}
