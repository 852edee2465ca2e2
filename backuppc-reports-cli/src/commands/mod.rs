//! Command handler modules for the CLI.

mod completions;
mod hostinfo;
mod monitor;
mod summary;
mod version;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: &Path, color: bool, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Summary { format } => summary::cmd_summary(config_path, format),
        Commands::Hostinfo { server } => hostinfo::cmd_hostinfo(config_path, &server, color),
        Commands::Monitor { dry_run } => monitor::cmd_monitor(config_path, dry_run, color),
        Commands::Version => {
            version::cmd_version();
            Ok(())
        }
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
