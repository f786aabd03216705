//! Debtdrone CLI - scan a repository for function-level complexity debt.

use clap::Parser;

mod cli;

use cli::args::{Cli, OutputFormatArg};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        cli::output::print_version();
        return Ok(());
    }

    // In JSON mode only errors may reach the terminal, and all logging
    // goes to stderr so stdout stays machine-clean.
    let log_level = if cli.output == OutputFormatArg::Json {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = cli::scan::run_scan(&cli)?;
    std::process::exit(exit_code);
}
