//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Configuration file used when neither `--config` nor the environment
/// names one
pub const DEFAULT_CONFIG_PATH: &str = "/opt/backuppc-reports/backuppc-reports.toml";

/// Reports and monitoring for a `BackupPC` server
#[derive(Parser)]
#[command(name = "backuppc-reports")]
#[command(author, version, about = "Reports and monitoring for BackupPC")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "BACKUPPC_REPORTS_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print status or error messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show a summary of every host
    #[command(about = "Show backup ages and state for every host")]
    Summary {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Show details for one host
    #[command(about = "Show every column BackupPC reports for one host")]
    Hostinfo {
        /// Host name exactly as shown by BackupPC
        #[arg(long)]
        server: String,
    },

    /// Check every host against the configured limits
    #[command(about = "Check backup ages and email an alert per problem host")]
    Monitor {
        /// Evaluate and print problems without sending email
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the version
    #[command(about = "Print the program version")]
    Version,

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command loads the configuration file
    #[must_use]
    pub const fn reads_config(&self) -> bool {
        matches!(
            self,
            Self::Summary { .. } | Self::Hostinfo { .. } | Self::Monitor { .. }
        )
    }
}

/// Output format for the host summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array with every column
    Json,
    /// CSV with a header row
    Csv,
}
