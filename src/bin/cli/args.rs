//! CLI argument structures.

use clap::{Parser, ValueEnum};

/// Scan a repository for function-level complexity debt.
#[derive(Parser, Debug)]
#[command(name = "debtdrone")]
#[command(disable_version_flag = true)]
#[command(about = "🛸 Debtdrone - Technical Debt Scanner")]
#[command(long_about = "
Scan a source repository for function-level complexity debt. Twelve
language families are analyzed with grammar-driven parse trees; findings
above the high-severity cutoffs are reported and gated.

Common Usage:

  # Scan the current directory
  debtdrone

  # Scan a specific repository and emit machine-readable JSON
  debtdrone --output json ~/code/service > report.json

  # Gate a CI build on medium severity and above
  debtdrone --fail-on medium ./src
")]
pub struct Cli {
    /// Path to the repository to analyze (overrides --path)
    pub target: Option<String>,

    /// Path to the repository to analyze
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Fail with exit code 1 if issues are found with severity >= this
    /// (low, medium, high, critical, none)
    #[arg(long = "fail-on", default_value = "high")]
    pub fail_on: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormatArg,

    /// Print the version and exit
    #[arg(long)]
    pub version: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The effective target directory: the positional argument wins over
    /// the --path flag.
    pub fn target_dir(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.path)
    }
}

/// Report format selected by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable report on stderr.
    Text,
    /// Pretty-printed JSON array on stdout.
    Json,
}
