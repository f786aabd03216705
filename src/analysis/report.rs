//! Report sink: render the issue list as colored text or pretty JSON and
//! compute the run summary.
//!
//! Stream discipline: human output belongs on stderr, machine output on
//! stdout, so `debtdrone --output json . > report.json` always yields a
//! valid JSON file with no interleaved prose.

use std::collections::{BTreeMap, BTreeSet};

use owo_colors::OwoColorize;

use crate::core::errors::Result;
use crate::core::metrics::{Severity, TechnicalDebtIssue};

/// Render the text report. Coloring applies only when `colored` is set
/// (the caller gates it on a terminal check).
pub fn render_text(issues: &[TechnicalDebtIssue], colored: bool) -> String {
    let mut out = String::new();
    out.push_str("\n📊 Analysis Report\n");
    out.push_str("==================\n");
    out.push_str(&format!("Total Issues: {}\n\n", issues.len()));

    for issue in issues {
        let label = severity_label(issue.severity, colored);
        out.push_str(&format!("[{label}] {}: {}\n", issue.file_path, issue.message));
    }

    out
}

/// Render the complete issue list as a pretty-printed JSON array.
pub fn render_json(issues: &[TechnicalDebtIssue]) -> Result<String> {
    Ok(serde_json::to_string_pretty(issues)?)
}

fn severity_label(severity: Severity, colored: bool) -> String {
    if !colored {
        return severity.as_str().to_string();
    }
    match severity {
        Severity::Critical => severity.as_str().red().bold().to_string(),
        Severity::High => severity.as_str().red().to_string(),
        Severity::Medium => severity.as_str().yellow().to_string(),
        Severity::Low => severity.as_str().blue().to_string(),
    }
}

/// Aggregated counts exported alongside the issue list.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReportSummary {
    /// Total number of issues in the report.
    pub total_issues_found: usize,
    /// Issues at critical severity.
    pub critical_count: usize,
    /// Issues at high severity.
    pub high_count: usize,
    /// Issues at medium severity.
    pub medium_count: usize,
    /// Issues at low severity.
    pub low_count: usize,
    /// Sum of per-issue debt estimates, in hours.
    pub total_debt_hours: f64,
    /// Same total expressed in minutes.
    pub total_debt_minutes: u64,
    /// Number of distinct files with at least one issue.
    pub affected_files: usize,
    /// Issue counts keyed by category.
    pub category_breakdown: BTreeMap<String, usize>,
    /// Mean debt per issue, in hours; zero for an empty report.
    pub avg_debt_hours_per_issue: f64,
    /// Critical plus high issues.
    pub high_priority_count: usize,
    /// Share of high-priority issues, in percent.
    pub high_priority_percentage: f64,
}

impl ReportSummary {
    /// Compute the summary for one issue list.
    pub fn from_issues(issues: &[TechnicalDebtIssue]) -> Self {
        let mut critical = 0usize;
        let mut high = 0usize;
        let mut medium = 0usize;
        let mut low = 0usize;
        let mut total_debt_hours = 0.0f64;
        let mut files = BTreeSet::new();
        let mut categories: BTreeMap<String, usize> = BTreeMap::new();

        for issue in issues {
            match issue.severity {
                Severity::Critical => critical += 1,
                Severity::High => high += 1,
                Severity::Medium => medium += 1,
                Severity::Low => low += 1,
            }
            if !issue.category.is_empty() {
                *categories.entry(issue.category.to_string()).or_default() += 1;
            }
            total_debt_hours += issue.technical_debt_hours;
            if !issue.file_path.is_empty() {
                files.insert(issue.file_path.as_str());
            }
        }

        let total = issues.len();
        let high_priority = critical + high;
        Self {
            total_issues_found: total,
            critical_count: critical,
            high_count: high,
            medium_count: medium,
            low_count: low,
            total_debt_hours,
            total_debt_minutes: (total_debt_hours * 60.0) as u64,
            affected_files: files.len(),
            category_breakdown: categories,
            avg_debt_hours_per_issue: if total > 0 {
                total_debt_hours / total as f64
            } else {
                0.0
            },
            high_priority_count: high_priority,
            high_priority_percentage: if total > 0 {
                high_priority as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        }
    }
}
