//! Lift high- and critical-severity metrics into reportable issues.

use crate::core::metrics::{ComplexityMetric, Severity, TechnicalDebtIssue};
use crate::core::thresholds::Thresholds;

/// Convert qualifying metrics into issues. Metrics below `high` severity
/// are reported in summaries but never become issues.
pub fn convert_to_issues(
    metrics: &[ComplexityMetric],
    thresholds: &Thresholds,
) -> Vec<TechnicalDebtIssue> {
    metrics
        .iter()
        .filter(|m| matches!(m.severity, Severity::High | Severity::Critical))
        .map(|m| issue_from_metric(m, thresholds))
        .collect()
}

fn issue_from_metric(metric: &ComplexityMetric, thresholds: &Thresholds) -> TechnicalDebtIssue {
    TechnicalDebtIssue {
        file_path: metric.file_path.clone(),
        line_number: metric.start_line,
        issue_type: "complexity",
        severity: metric.severity,
        category: "maintainability",
        message: format_message(metric, thresholds),
        description: Some(format_description(metric)),
        tool_name: "complexity_analyzer",
        technical_debt_hours: f64::from(metric.technical_debt_minutes) / 60.0,
        code_snippet: metric.code_snippet.clone(),
        confidence_score: 1.0,
        effort_multiplier: 1.0,
        status: "open",
    }
}

/// One-line message: the first matching rule wins.
fn format_message(metric: &ComplexityMetric, thresholds: &Thresholds) -> String {
    if metric.cyclomatic_complexity > thresholds.cyclomatic_critical {
        return format!(
            "Function '{}' has critical cyclomatic complexity of {} (threshold: {})",
            metric.function_name, metric.cyclomatic_complexity, thresholds.cyclomatic_critical
        );
    }
    if metric.cyclomatic_complexity > thresholds.cyclomatic_high {
        return format!(
            "Function '{}' has high cyclomatic complexity of {} (threshold: {})",
            metric.function_name, metric.cyclomatic_complexity, thresholds.cyclomatic_high
        );
    }
    if metric.nesting_depth > thresholds.nesting_critical - 1 {
        return format!(
            "Function '{}' has deep nesting depth of {} (threshold: {})",
            metric.function_name,
            metric.nesting_depth,
            thresholds.nesting_critical - 1
        );
    }
    format!("Function '{}' has complexity issues", metric.function_name)
}

/// Multi-line detail block carried in the issue description.
fn format_description(metric: &ComplexityMetric) -> String {
    let mut parts = vec![
        format!("Function: {}", metric.function_name),
        format!("Cyclomatic Complexity: {}", metric.cyclomatic_complexity),
    ];

    if let Some(cognitive) = metric.cognitive_complexity {
        parts.push(format!("Cognitive Complexity: {cognitive}"));
    }

    parts.push(format!("Nesting Depth: {}", metric.nesting_depth));
    parts.push(format!("Parameters: {}", metric.parameter_count));
    parts.push(format!("Lines of Code: {}", metric.lines_of_code));
    parts.push(format!(
        "Estimated Refactoring Time: {} minutes",
        metric.technical_debt_minutes
    ));

    if !metric.refactoring_suggestions.is_empty() {
        parts.push("\nRefactoring Suggestions:".to_string());
        for suggestion in &metric.refactoring_suggestions {
            parts.push(format!(
                "- [{}] {}: {}",
                suggestion.priority.to_uppercase(),
                suggestion.title,
                suggestion.description
            ));
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::RefactoringSuggestion;
    use uuid::Uuid;

    fn metric_with(severity: Severity, cyclomatic: u32, nesting: u32) -> ComplexityMetric {
        ComplexityMetric {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            repository_id: Uuid::new_v4(),
            analysis_run_id: Uuid::new_v4(),
            file_path: "src/big.rs".to_string(),
            function_name: "churn".to_string(),
            start_line: 40,
            end_line: 120,
            cyclomatic_complexity: cyclomatic,
            cognitive_complexity: Some(12),
            nesting_depth: nesting,
            parameter_count: 3,
            lines_of_code: 81,
            severity,
            technical_debt_minutes: 30,
            code_snippet: Some("fn churn() {".to_string()),
            refactoring_suggestions: vec![RefactoringSuggestion {
                priority: "high",
                title: "Extract Functions",
                description: "Break it down",
            }],
            language: "Rust",
        }
    }

    #[test]
    fn only_high_and_critical_become_issues() {
        let metrics = vec![
            metric_with(Severity::Low, 4, 1),
            metric_with(Severity::Medium, 12, 2),
            metric_with(Severity::High, 17, 3),
            metric_with(Severity::Critical, 25, 6),
        ];
        let issues = convert_to_issues(&metrics, &Thresholds::default());
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| matches!(i.severity, Severity::High | Severity::Critical)));
    }

    #[test]
    fn message_cascade_critical_cyclomatic_first() {
        let t = Thresholds::default();
        let critical = metric_with(Severity::Critical, 25, 6);
        assert_eq!(
            format_message(&critical, &t),
            "Function 'churn' has critical cyclomatic complexity of 25 (threshold: 20)"
        );

        let high = metric_with(Severity::High, 17, 2);
        assert_eq!(
            format_message(&high, &t),
            "Function 'churn' has high cyclomatic complexity of 17 (threshold: 10)"
        );

        let nested = metric_with(Severity::Critical, 4, 7);
        assert_eq!(
            format_message(&nested, &t),
            "Function 'churn' has deep nesting depth of 7 (threshold: 5)"
        );

        let generic = metric_with(Severity::High, 4, 2);
        assert_eq!(
            format_message(&generic, &t),
            "Function 'churn' has complexity issues"
        );
    }

    #[test]
    fn issue_fields_derive_from_the_metric() {
        let metrics = vec![metric_with(Severity::High, 17, 3)];
        let issues = convert_to_issues(&metrics, &Thresholds::default());
        let issue = &issues[0];

        assert_eq!(issue.file_path, "src/big.rs");
        assert_eq!(issue.line_number, 40);
        assert_eq!(issue.issue_type, "complexity");
        assert_eq!(issue.category, "maintainability");
        assert_eq!(issue.tool_name, "complexity_analyzer");
        assert!((issue.technical_debt_hours - 0.5).abs() < f64::EPSILON);
        assert_eq!(issue.status, "open");
        assert!((issue.confidence_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn description_lists_metrics_and_uppercased_suggestions() {
        let metrics = vec![metric_with(Severity::High, 17, 3)];
        let issues = convert_to_issues(&metrics, &Thresholds::default());
        let description = issues[0].description.as_deref().unwrap();

        assert!(description.contains("Function: churn"));
        assert!(description.contains("Cyclomatic Complexity: 17"));
        assert!(description.contains("Cognitive Complexity: 12"));
        assert!(description.contains("Nesting Depth: 3"));
        assert!(description.contains("Parameters: 3"));
        assert!(description.contains("Lines of Code: 81"));
        assert!(description.contains("Estimated Refactoring Time: 30 minutes"));
        assert!(description.contains("- [HIGH] Extract Functions: Break it down"));
    }

    #[test]
    fn description_omits_absent_cognitive() {
        let mut metric = metric_with(Severity::High, 17, 3);
        metric.cognitive_complexity = None;
        let description = format_description(&metric);
        assert!(!description.contains("Cognitive Complexity"));
    }
}
