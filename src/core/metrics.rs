//! Metric and issue records produced by the analysis pipeline.
//!
//! A [`ComplexityMetric`] describes one function; qualifying metrics are
//! lifted into [`TechnicalDebtIssue`] records for reporting. Both carry
//! the run context tags assigned by the repository walker.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issue severity, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Within every threshold.
    Low,
    /// Above the medium cutoffs of the cascade.
    Medium,
    /// Above the high cutoffs; converted into an issue.
    High,
    /// Above the critical cutoffs; converted into an issue.
    Critical,
}

impl Severity {
    /// Canonical lowercase name, as used in reports and the JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Rank used by the quality gate (`info` occupies rank 0).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One table-driven refactoring recommendation for a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefactoringSuggestion {
    /// Suggestion priority ("high" or "medium").
    pub priority: &'static str,
    /// Short title, e.g. "Extract Functions".
    pub title: &'static str,
    /// Language-flavored description of the refactoring.
    pub description: &'static str,
}

/// Complexity measurements for a single function.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityMetric {
    /// Unique metric identifier, assigned by the repository walker.
    pub id: Uuid,
    /// Owning user tag.
    pub user_id: Uuid,
    /// Repository tag.
    pub repository_id: Uuid,
    /// Analysis run tag.
    pub analysis_run_id: Uuid,
    /// Repository-relative path of the source file.
    pub file_path: String,
    /// Function name (receiver-qualified for methods where applicable).
    pub function_name: String,
    /// 1-based first line of the function node.
    pub start_line: usize,
    /// 1-based last line of the function node (inclusive).
    pub end_line: usize,
    /// McCabe cyclomatic complexity, always at least 1.
    pub cyclomatic_complexity: u32,
    /// Cognitive complexity; absent for languages that do not compute it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognitive_complexity: Option<u32>,
    /// Maximum nesting depth across the function body.
    pub nesting_depth: u32,
    /// Number of declared parameters (language-specific skip rules applied).
    pub parameter_count: u32,
    /// `end_line - start_line + 1`.
    pub lines_of_code: usize,
    /// Severity per the classification cascade.
    pub severity: Severity,
    /// Estimated refactoring effort in minutes.
    pub technical_debt_minutes: u32,
    /// Truncated body text (at most 300 bytes plus an ellipsis marker).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// Ordered refactoring recommendations.
    pub refactoring_suggestions: Vec<RefactoringSuggestion>,
    /// Language tag (e.g. "Go", "C/C++").
    pub language: &'static str,
}

impl ComplexityMetric {
    /// Identity-free view used by order-insensitive set comparisons in
    /// tests: everything except the per-run UUID tags.
    pub fn fingerprint(&self) -> (String, String, usize, usize, u32, Option<u32>, u32, u32) {
        (
            self.file_path.clone(),
            self.function_name.clone(),
            self.start_line,
            self.end_line,
            self.cyclomatic_complexity,
            self.cognitive_complexity,
            self.nesting_depth,
            self.parameter_count,
        )
    }
}

/// A reportable technical-debt finding derived from one metric.
///
/// Serialization is restricted to the ten keys of the machine-readable
/// report schema; internal bookkeeping fields are skipped.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalDebtIssue {
    /// Repository-relative path of the offending file.
    pub file_path: String,
    /// Function start line.
    pub line_number: usize,
    /// Always "complexity" for issues produced by this tool.
    pub issue_type: &'static str,
    /// Severity inherited from the metric.
    pub severity: Severity,
    /// Always "maintainability".
    pub category: &'static str,
    /// One-line human message.
    pub message: String,
    /// Multi-line detail: metric values and suggestions.
    pub description: Option<String>,
    /// Producing tool identifier.
    pub tool_name: &'static str,
    /// Debt estimate in hours (`minutes / 60`).
    pub technical_debt_hours: f64,
    /// Truncated body text carried over from the metric.
    pub code_snippet: Option<String>,

    /// Detection confidence; complexity findings are deterministic.
    #[serde(skip)]
    pub confidence_score: f64,
    /// Effort scaling factor, reserved for downstream consumers.
    #[serde(skip)]
    pub effort_multiplier: f64,
    /// Lifecycle status; new findings start "open".
    #[serde(skip)]
    pub status: &'static str,
}

/// Identifier tags stamped on every metric of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    /// Analysis run identifier.
    pub analysis_run_id: Uuid,
    /// Repository identifier.
    pub repository_id: Uuid,
    /// User identifier.
    pub user_id: Uuid,
}

impl RunContext {
    /// Create a context with fresh identifiers.
    pub fn new() -> Self {
        Self {
            analysis_run_id: Uuid::new_v4(),
            repository_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metric() -> ComplexityMetric {
        ComplexityMetric {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            repository_id: Uuid::new_v4(),
            analysis_run_id: Uuid::new_v4(),
            file_path: "src/server.go".to_string(),
            function_name: "(*Server).Handle".to_string(),
            start_line: 10,
            end_line: 24,
            cyclomatic_complexity: 3,
            cognitive_complexity: Some(4),
            nesting_depth: 1,
            parameter_count: 2,
            lines_of_code: 15,
            severity: Severity::Low,
            technical_debt_minutes: 5,
            code_snippet: Some("func ...".to_string()),
            refactoring_suggestions: Vec::new(),
            language: "Go",
        }
    }

    #[test]
    fn severity_ordering_and_ranks() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
        assert_eq!(Severity::Low.rank(), 1);
        assert_eq!(Severity::Critical.rank(), 4);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(Severity::High.to_string(), "high");
    }

    #[test]
    fn metric_invariants_hold_for_sample() {
        let m = sample_metric();
        assert!(m.start_line <= m.end_line);
        assert!(m.cyclomatic_complexity >= 1);
        assert_eq!(m.lines_of_code, m.end_line - m.start_line + 1);
    }

    #[test]
    fn fingerprint_ignores_run_identifiers() {
        let a = sample_metric();
        let mut b = a.clone();
        b.id = Uuid::new_v4();
        b.analysis_run_id = Uuid::new_v4();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn issue_serializes_exactly_the_schema_keys() {
        let issue = TechnicalDebtIssue {
            file_path: "src/a.py".to_string(),
            line_number: 3,
            issue_type: "complexity",
            severity: Severity::High,
            category: "maintainability",
            message: "Function 'f' has high cyclomatic complexity of 12 (threshold: 10)"
                .to_string(),
            description: Some("Function: f".to_string()),
            tool_name: "complexity_analyzer",
            technical_debt_hours: 0.25,
            code_snippet: None,
            confidence_score: 1.0,
            effort_multiplier: 1.0,
            status: "open",
        };

        let value = serde_json::to_value(&issue).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "category",
                "code_snippet",
                "description",
                "file_path",
                "issue_type",
                "line_number",
                "message",
                "severity",
                "technical_debt_hours",
                "tool_name",
            ]
        );
    }

    #[test]
    fn run_context_ids_are_distinct() {
        let ctx = RunContext::new();
        assert_ne!(ctx.analysis_run_id, ctx.repository_id);
        assert_ne!(ctx.repository_id, ctx.user_id);
    }
}
