//! `BackupPC` Reports Core Library
//!
//! Fetches the `BackupPC` host summary page, scrapes its host table into
//! structured records and evaluates each host's backup ages against
//! configured thresholds, alerting by email when backups are stale.
//!
//! # Crate Structure
//!
//! - [`config`] - Configuration file loading and validated settings
//! - [`fetch`] - Authenticated dashboard page fetch
//! - [`extract`] - Host summary table scraping
//! - [`models`] - Host records and in-memory lookup
//! - [`health`] - Threshold evaluation and the monitoring pass
//! - [`notify`] - Email alerts over SMTP
//! - [`tracing`] - Structured logging setup
//!
//! The pipeline is linear:
//! config → fetch → extract → {present | evaluate → notify}.

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod health;
pub mod models;
pub mod notify;
pub mod tracing;

pub use config::{ConfigLoader, NotificationSettings, Settings, Thresholds};
pub use error::{
    ConfigError, DataQualityError, ExtractError, FetchError, HostNotFound, NotificationError,
    ReportsError, Result,
};
pub use extract::TableExtractor;
pub use fetch::DashboardFetcher;
pub use health::{HealthResult, Monitor, MonitorReport, MonitorTally, evaluate};
pub use models::{HostField, HostStatus, HostTable};
pub use notify::{Notification, Notifier, SmtpNotifier};
