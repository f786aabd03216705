//! Orchestrator: run the fixed analyzer set over a repository and merge
//! their results into one report.

use std::path::Path;

use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::analysis::issues::convert_to_issues;
use crate::analysis::report::ReportSummary;
use crate::analysis::walker::collect_metrics;
use crate::core::cancel::CancellationToken;
use crate::core::errors::{DebtdroneError, Result};
use crate::core::metrics::{RunContext, Severity, TechnicalDebtIssue};
use crate::core::thresholds::Thresholds;

/// What one analyzer contributes to the run.
#[derive(Debug, Default)]
pub struct AnalyzerOutcome {
    /// Reportable issues.
    pub issues: Vec<TechnicalDebtIssue>,
    /// Named metric values merged into the run summary.
    pub metrics: Map<String, Value>,
}

/// One repository-level analyzer in the orchestrated set.
pub trait Analyzer {
    /// Analyzer name used in logs and progress output.
    fn name(&self) -> &'static str;

    /// Analyze the repository rooted at `repo`.
    fn analyze(&self, ctx: &RunContext, repo: &Path) -> Result<AnalyzerOutcome>;
}

/// The merged result of a full run.
#[derive(Debug)]
pub struct EngineReport {
    /// All issues, concatenated in analyzer order.
    pub issues: Vec<TechnicalDebtIssue>,
    /// Merged per-analyzer metrics plus the issue summary.
    pub metrics: Map<String, Value>,
}

/// The complexity analyzer: walk the repository, compute per-function
/// metrics, convert qualifying ones into issues.
pub struct ComplexityAnalyzer {
    thresholds: Thresholds,
    cancel: CancellationToken,
}

impl ComplexityAnalyzer {
    /// Create a complexity analyzer with the default thresholds.
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            thresholds: Thresholds::default(),
            cancel,
        }
    }
}

impl Analyzer for ComplexityAnalyzer {
    fn name(&self) -> &'static str {
        "ComplexityAnalyzer"
    }

    fn analyze(&self, ctx: &RunContext, repo: &Path) -> Result<AnalyzerOutcome> {
        let metrics = collect_metrics(repo, ctx, &self.cancel)?;
        info!("Analyzed {} functions across repository", metrics.len());

        let issues = convert_to_issues(&metrics, &self.thresholds);
        let mut outcome = AnalyzerOutcome {
            issues,
            metrics: Map::new(),
        };

        outcome.metrics.insert(
            "complexity_functions_analyzed".to_string(),
            json!(metrics.len()),
        );
        if !metrics.is_empty() {
            let total: u64 = metrics.iter().map(|m| u64::from(m.cyclomatic_complexity)).sum();
            let max = metrics
                .iter()
                .map(|m| m.cyclomatic_complexity)
                .max()
                .unwrap_or(1);
            let critical = metrics
                .iter()
                .filter(|m| m.severity == Severity::Critical)
                .count();
            let high = metrics
                .iter()
                .filter(|m| m.severity == Severity::High)
                .count();
            let debt_minutes: u64 = metrics
                .iter()
                .map(|m| u64::from(m.technical_debt_minutes))
                .sum();

            outcome.metrics.insert(
                "complexity_avg_cyclomatic".to_string(),
                json!(total as f64 / metrics.len() as f64),
            );
            outcome
                .metrics
                .insert("complexity_max_cyclomatic".to_string(), json!(max));
            outcome
                .metrics
                .insert("complexity_critical_functions".to_string(), json!(critical));
            outcome
                .metrics
                .insert("complexity_high_functions".to_string(), json!(high));
            outcome
                .metrics
                .insert("complexity_debt_minutes".to_string(), json!(debt_minutes));
        }

        Ok(outcome)
    }
}

/// Runs the analyzer set sequentially and merges results.
pub struct Engine {
    analyzers: Vec<Box<dyn Analyzer>>,
    cancel: CancellationToken,
}

impl Engine {
    /// Build an engine over an explicit analyzer set.
    pub fn new(analyzers: Vec<Box<dyn Analyzer>>, cancel: CancellationToken) -> Self {
        Self { analyzers, cancel }
    }

    /// Build the fixed default set: line counter, complexity, and the
    /// security placeholder, in that order.
    pub fn with_default_analyzers() -> Self {
        let cancel = CancellationToken::new();
        let analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(crate::analysis::loc::LineCounter::new()),
            Box::new(ComplexityAnalyzer::new(cancel.clone())),
            Box::new(crate::analysis::security::SecurityAnalyzer::new()),
        ];
        Self { analyzers, cancel }
    }

    /// The cancellation token honored between analyzers and files.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Number of analyzers in the set (drives progress display).
    pub fn analyzer_count(&self) -> usize {
        self.analyzers.len()
    }

    /// Run every analyzer over the repository. Per-analyzer errors are
    /// logged and absorbed; cancellation aborts the run and discards the
    /// partial report.
    pub fn run(
        &self,
        ctx: &RunContext,
        repo: &Path,
        mut on_analyzer_done: impl FnMut(&str),
    ) -> Result<EngineReport> {
        let mut issues = Vec::new();
        let mut metrics = Map::new();

        for analyzer in &self.analyzers {
            if self.cancel.is_cancelled() {
                return Err(DebtdroneError::pipeline(
                    analyzer.name(),
                    "analysis cancelled",
                ));
            }

            info!("Running analyzer: {}", analyzer.name());
            match analyzer.analyze(ctx, repo) {
                Ok(outcome) => {
                    issues.extend(outcome.issues);
                    for (key, value) in outcome.metrics {
                        metrics.insert(key, value);
                    }
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!("Analyzer {} failed: {err}", analyzer.name());
                }
            }

            on_analyzer_done(analyzer.name());
        }

        let summary = ReportSummary::from_issues(&issues);
        if let Value::Object(summary_map) = serde_json::to_value(&summary)? {
            for (key, value) in summary_map {
                metrics.insert(key, value);
            }
        }

        Ok(EngineReport { issues, metrics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn name(&self) -> &'static str {
            "FailingAnalyzer"
        }

        fn analyze(&self, _ctx: &RunContext, _repo: &Path) -> Result<AnalyzerOutcome> {
            Err(DebtdroneError::internal("deliberate failure"))
        }
    }

    const DIRTY_PY: &str = r#"
def tangle(rows, strict, limit, mode):
    for row in rows:
        if row.ok:
            for cell in row:
                if cell.filled and strict:
                    while cell.dirty:
                        if cell.count > limit or mode == "force":
                            return True
    return False
"#;

    #[test]
    fn default_engine_has_the_fixed_analyzer_set() {
        let engine = Engine::with_default_analyzers();
        assert_eq!(engine.analyzer_count(), 3);
    }

    #[test]
    fn run_merges_issues_and_metrics() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dirty.py"), DIRTY_PY).unwrap();
        fs::write(dir.path().join("clean.py"), "def ok():\n    return 1\n").unwrap();

        let engine = Engine::with_default_analyzers();
        let mut seen = Vec::new();
        let report = engine
            .run(&RunContext::new(), dir.path(), |name| {
                seen.push(name.to_string())
            })
            .unwrap();

        assert_eq!(
            seen,
            vec!["LineCounter", "ComplexityAnalyzer", "SecurityAnalyzer"]
        );
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.metrics["file_count"], serde_json::json!(2));
        assert_eq!(report.metrics["total_issues_found"], serde_json::json!(1));
        assert_eq!(
            report.metrics["complexity_functions_analyzed"],
            serde_json::json!(2)
        );
    }

    #[test]
    fn analyzer_errors_are_absorbed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.py"), "def f():\n    return 1\n").unwrap();

        let cancel = CancellationToken::new();
        let engine = Engine::new(
            vec![
                Box::new(FailingAnalyzer),
                Box::new(ComplexityAnalyzer::new(cancel.clone())),
            ],
            cancel,
        );

        let report = engine.run(&RunContext::new(), dir.path(), |_| {}).unwrap();
        assert_eq!(
            report.metrics["complexity_functions_analyzed"],
            serde_json::json!(1)
        );
    }

    #[test]
    fn cancellation_discards_the_partial_report() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.py"), "def f():\n    return 1\n").unwrap();

        let engine = Engine::with_default_analyzers();
        engine.cancellation_token().cancel();
        assert!(engine.run(&RunContext::new(), dir.path(), |_| {}).is_err());
    }

    #[test]
    fn clean_tree_produces_zero_issues() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("calc.py"), "def add(a, b):\n    return a + b\n").unwrap();

        let engine = Engine::with_default_analyzers();
        let report = engine.run(&RunContext::new(), dir.path(), |_| {}).unwrap();
        assert!(report.issues.is_empty());
        assert_eq!(report.metrics["total_issues_found"], serde_json::json!(0));
    }
}
