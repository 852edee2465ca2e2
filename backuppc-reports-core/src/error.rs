//! Error types for the `BackupPC` reports core library.
//!
//! Each pipeline stage has its own error enum. [`ReportsError`] wraps all of
//! them for callers that only need to propagate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file exists but could not be read
    #[error("Failed to read config file: {0}")]
    Read(String),

    /// The file is not valid or is missing a required key
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A key is present but its value is unusable
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        /// Dotted key name, e.g. `general.max_full_backup_age`
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while fetching the dashboard page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("Request to BackupPC timed out after {0} seconds")]
    Timeout(u64),

    /// Any transport-level failure (DNS, refused connection, TLS, ...)
    #[error("Failed to connect to BackupPC: {0}")]
    Connection(String),

    /// The server answered with a non-success status
    #[error("BackupPC answered HTTP {status} - {reason}")]
    HttpStatus {
        /// Numeric status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Structural faults in the dashboard markup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The host summary table is absent from the page
    #[error("Malformed page: no table with id '{0}'")]
    TableNotFound(String),

    /// A data row does not have the expected number of cells
    #[error("Malformed page: row {row} has {found} cells, expected {expected}")]
    CellCount {
        /// 1-based row index, header included
        row: usize,
        /// Required cell count
        expected: usize,
        /// Actual cell count
        found: usize,
    },

    /// A data row has an empty hostname cell
    #[error("Malformed page: row {row} has an empty hostname")]
    EmptyHostname {
        /// 1-based row index, header included
        row: usize,
    },
}

/// Result type for extraction
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// A numeric field of one host could not be interpreted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Host '{hostname}' has an unusable value for {field}: '{value}'")]
pub struct DataQualityError {
    /// Host the record belongs to
    pub hostname: String,
    /// Human-readable field name
    pub field: String,
    /// Raw cell text
    pub value: String,
}

/// Lookup by hostname found no record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Host '{0}' NOT FOUND in BackupPC")]
pub struct HostNotFound(pub String);

/// Errors raised while sending an email notification
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Sender or recipient address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),

    /// SMTP dialogue failed (connect, STARTTLS, auth, send)
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Result type for notification delivery
pub type NotificationResult<T> = std::result::Result<T, NotificationError>;

/// Top-level error for the whole library
#[derive(Debug, Error)]
pub enum ReportsError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Dashboard fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Table extraction error
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Per-host data quality error
    #[error(transparent)]
    DataQuality(#[from] DataQualityError),

    /// Host lookup error
    #[error(transparent)]
    HostNotFound(#[from] HostNotFound),

    /// Notification error
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, ReportsError>;
