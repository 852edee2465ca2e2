//! `BackupPC` Reports CLI - command-line reports and monitoring for `BackupPC`
//!
//! Prints a summary of every host, shows details for a single host, and
//! checks backup ages against configured limits, alerting by email.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use backuppc_reports_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&tracing_config(&cli)) {
        if !cli.quiet {
            eprintln!("Warning: {e}");
        }
    }

    if cli.command.reads_config() && !cli.quiet {
        eprintln!("Using config file: {}", cli.config.display());
    }

    let result = commands::dispatch(&cli.config, !cli.no_color, cli.command);

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Builds the logging setup from the global flags, honouring `RUST_LOG`
fn tracing_config(cli: &Cli) -> TracingConfig {
    let mut config = TracingConfig::new()
        .with_level(TracingLevel::from_verbosity(cli.verbose))
        .with_ansi(!cli.no_color);

    if let Some(ref path) = cli.log_file {
        config = config.with_output(TracingOutput::File(path.clone()));
    }

    match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.trim().is_empty() => config.with_filter(filter),
        _ => config,
    }
}
