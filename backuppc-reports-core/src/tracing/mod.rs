//! Tracing integration for structured logging
//!
//! Installs a `tracing-subscriber` formatter with an `EnvFilter`. Logs go to
//! stderr by default so they never mix with report output on stdout, or to
//! a file for unattended runs.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Targets the level applies to: the library crate and the `backuppc-reports` binary
const TARGETS: [&str; 2] = ["backuppc_reports_core", "backuppc_reports"];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings (default)
    #[default]
    Warn,
    /// Info level - errors, warnings, and info
    Info,
    /// Debug level - all above plus debug messages
    Debug,
    /// Trace level - all messages including trace
    Trace,
}

impl TracingLevel {
    /// Level for a `-v` repetition count
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Output destination for tracing logs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Output to stderr
    #[default]
    Stderr,
    /// Append to a file
    File(PathBuf),
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Whether ANSI colors are allowed on stderr
    pub ansi: bool,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables ANSI colors
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Filter directives derived from the level, scoped to this workspace
    #[must_use]
    pub fn directives(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            TARGETS
                .iter()
                .map(|target| format!("{target}={}", self.level))
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// This function should be called once at application startup.
/// Subsequent calls will return an error.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter directives are invalid
/// - File output is configured but the file cannot be opened
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_new(config.directives())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    match &config.output {
        TracingOutput::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(config.ansi)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;
        }
        TracingOutput::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| TracingError::FileCreationFailed(format!("{}: {e}", path.display())))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(false)
                        .with_writer(file),
                )
                .try_init()
                .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;
        }
    }

    tracing::debug!(level = %config.level, "Tracing initialized");
    Ok(())
}
