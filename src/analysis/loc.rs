//! Line-of-code counter: a secondary analyzer producing file and line
//! totals. It neither parses nor classifies, so it stays separate from
//! the complexity engine.

use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::debug;
use walkdir::WalkDir;

use crate::analysis::orchestrator::{Analyzer, AnalyzerOutcome};
use crate::analysis::walker::PRUNED_DIRECTORIES;
use crate::core::errors::Result;
use crate::core::metrics::RunContext;

/// Extensions counted by the LOC analyzer. Intentionally narrower than
/// the complexity dispatch table: only the "classic" set carries over.
const CODE_EXTENSIONS: &[&str] = &[
    "go", "js", "ts", "tsx", "jsx", "py", "java", "cs", "c", "cpp", "h", "rb", "php",
];

/// Counts newline characters and matching files across the repository.
#[derive(Debug, Default)]
pub struct LineCounter;

impl LineCounter {
    /// Create a new line counter.
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for LineCounter {
    fn name(&self) -> &'static str {
        "LineCounter"
    }

    fn analyze(&self, _ctx: &RunContext, repo: &Path) -> Result<AnalyzerOutcome> {
        let mut total_lines = 0u64;
        let mut file_count = 0u64;

        let walker = WalkDir::new(repo).into_iter().filter_entry(|entry| {
            !entry.file_type().is_dir()
                || !PRUNED_DIRECTORIES.contains(&entry.file_name().to_string_lossy().as_ref())
        });

        for entry in walker.flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !is_code_file(path) {
                continue;
            }

            let Ok(content) = fs::read(path) else {
                continue;
            };
            total_lines += content.iter().filter(|b| **b == b'\n').count() as u64;
            file_count += 1;
        }

        debug!("Counted {total_lines} lines across {file_count} files");

        let mut outcome = AnalyzerOutcome::default();
        outcome.metrics.insert("loc".to_string(), json!(total_lines));
        outcome
            .metrics
            .insert("file_count".to_string(), json!(file_count));
        Ok(outcome)
    }
}

fn is_code_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| CODE_EXTENSIONS.contains(&ext.as_str()))
}
