//! The scan command: preflight, engine run, report, and quality gate.

use std::io::IsTerminal;
use std::path::PathBuf;

use debtdrone::analysis::gate::{should_fail, FailThreshold};
use debtdrone::analysis::orchestrator::Engine;
use debtdrone::analysis::report::{render_json, render_text};
use debtdrone::analysis::security::binary_on_path;
use debtdrone::core::metrics::RunContext;

use crate::cli::args::{Cli, OutputFormatArg};
use crate::cli::output;

/// Run the scan end to end. Returns the process exit code: 0 when the
/// gate passes, 1 on gate failure or a fatal resolution error.
pub fn run_scan(cli: &Cli) -> anyhow::Result<i32> {
    let text_mode = cli.output == OutputFormatArg::Text;

    if !check_dependencies(text_mode) {
        return Ok(1);
    }

    let target = cli.target_dir();
    let repo: PathBuf = match std::fs::canonicalize(target) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("❌ Failed to resolve path: {err}");
            return Ok(1);
        }
    };

    if text_mode {
        output::print_banner();
        eprintln!("🔍 Scanning repository at: {}", repo.display());
    }

    let engine = Engine::with_default_analyzers();
    let ctx = RunContext::new();

    let bar = text_mode
        .then(|| output::start_spinner(engine.analyzer_count(), "Analysing repository structure..."));

    let report = {
        let bar = bar.as_ref();
        engine.run(&ctx, &repo, |_| {
            if let Some(bar) = bar {
                bar.inc(1);
            }
        })
    };

    if let Some(bar) = bar {
        bar.finish();
        eprintln!();
    }

    let report = match report {
        Ok(report) => report,
        Err(err) => {
            eprintln!("❌ Analysis failed: {err}");
            return Ok(1);
        }
    };

    match cli.output {
        OutputFormatArg::Json => println!("{}", render_json(&report.issues)?),
        OutputFormatArg::Text => {
            let colored = std::io::stderr().is_terminal();
            eprint!("{}", render_text(&report.issues, colored));
        }
    }

    let threshold = FailThreshold::parse_lossy(&cli.fail_on);
    if should_fail(&report.issues, threshold) {
        output::print_gate_failure();
        return Ok(1);
    }

    if text_mode {
        output::print_epilogue(report.issues.len());
    }

    Ok(0)
}

/// Verify external tooling: git is required, the security scanner is
/// optional and only warned about.
fn check_dependencies(text_mode: bool) -> bool {
    if !binary_on_path("git") {
        eprintln!("❌ Error: git is required but not installed.");
        return false;
    }

    if text_mode && !binary_on_path("trivy") {
        eprintln!("⚠️  Trivy not found. Security scanning will be skipped.");
    }

    true
}
