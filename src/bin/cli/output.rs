//! Terminal output helpers: banner, spinner, version, and epilogue.
//!
//! Everything here writes to stderr; stdout is reserved for the JSON
//! report.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;

const DRONE_BANNER: &str = r#"
░█▀▄░█▀▀░█▀▄░▀█▀░█▀▄░█▀▄░█▀█░█▀█░█▀▀
░█░█░█▀▀░█▀▄░░█░░█░█░█▀▄░█░█░█░█░█▀▀
░▀▀░░▀▀▀░▀▀░░░▀░░▀▀░░▀░▀░▀▀▀░▀░▀░▀▀▀
"#;

/// Print the cyan ASCII banner to stderr.
pub fn print_banner() {
    let banner = DRONE_BANNER.trim_start_matches('\n');
    eprintln!();
    if std::io::stderr().is_terminal() {
        eprintln!("{}", banner.cyan());
    } else {
        eprintln!("{banner}");
    }
    eprintln!();
}

/// Print the version triple to stderr.
pub fn print_version() {
    let version = env!("CARGO_PKG_VERSION");
    let commit = option_env!("DEBTDRONE_COMMIT").unwrap_or("none");
    let date = option_env!("DEBTDRONE_BUILD_DATE").unwrap_or("unknown");
    eprintln!("debtdrone version {version}, commit {commit}, built at {date}");
}

/// Start the per-analyzer progress spinner on stderr.
pub fn start_spinner(total: usize, description: &str) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(
        Some(total as u64),
        ProgressDrawTarget::stderr(),
    );
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{pos}/{len}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(description.to_string());
    bar.enable_steady_tick(Duration::from_millis(65));
    bar
}

/// Print the end-of-scan status line to stderr.
pub fn print_epilogue(issue_count: usize) {
    if issue_count > 0 {
        eprintln!("\n⚠️  Scan completed with {issue_count} issues.");
    } else {
        eprintln!("\n✅ Scan passed. No issues found.");
    }
}

/// Print the quality-gate failure line to stderr.
pub fn print_gate_failure() {
    eprintln!("\n❌ Quality Gate failed: Technical debt threshold exceeded.");
}
