//! CLI error types and exit codes.

use backuppc_reports_core::error::{
    ConfigError, ExtractError, FetchError, HostNotFound, ReportsError,
};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// Any failure: configuration, fetch, page layout, unknown host
    pub const GENERAL_ERROR: i32 = 1;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dashboard could not be fetched
    #[error("Cannot fetch BackupPC dashboard: {0}")]
    Fetch(String),

    /// The dashboard page did not have the expected layout
    #[error("Unexpected BackupPC page: {0}")]
    Page(String),

    /// Requested host is not on the dashboard
    #[error("Host '{0}' NOT FOUND in BackupPC")]
    HostNotFound(String),

    /// A host's data could not be read
    #[error("Data error: {0}")]
    DataQuality(String),

    /// Alert delivery error
    #[error("Notification error: {0}")]
    Notification(String),

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<ReportsError> for CliError {
    fn from(err: ReportsError) -> Self {
        match err {
            ReportsError::Config(e) => Self::Config(e.to_string()),
            ReportsError::Fetch(e) => Self::Fetch(e.to_string()),
            ReportsError::Extract(e) => Self::Page(e.to_string()),
            ReportsError::DataQuality(e) => Self::DataQuality(e.to_string()),
            ReportsError::HostNotFound(e) => Self::HostNotFound(e.0),
            ReportsError::Notification(e) => Self::Notification(e.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        ReportsError::from(err).into()
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        ReportsError::from(err).into()
    }
}

impl From<ExtractError> for CliError {
    fn from(err: ExtractError) -> Self {
        ReportsError::from(err).into()
    }
}

impl From<HostNotFound> for CliError {
    fn from(err: HostNotFound) -> Self {
        ReportsError::from(err).into()
    }
}

impl CliError {
    /// Returns the exit code for this error.
    ///
    /// Every failure exits with 1; success is 0.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::Fetch(_)
            | Self::Page(_)
            | Self::HostNotFound(_)
            | Self::DataQuality(_)
            | Self::Notification(_)
            | Self::Output(_)
            | Self::Runtime(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
