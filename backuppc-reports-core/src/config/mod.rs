//! Configuration loading for `BackupPC` reports
//!
//! The configuration file is TOML with three sections:
//!
//! ```toml
//! [backuppc]
//! url = "https://backup.example.com/backuppc/index.cgi"
//! username = "admin"
//! password = "secret"
//!
//! [general]
//! max_full_backup_age = 8
//! max_incr_backup_age = 2
//! last_backup_age = 2
//!
//! [notifications]
//! email_to = "ops@example.com"
//! email_from = "backuppc@example.com"
//! smtp_server = "localhost"
//! smtp_port = 25
//! smtp_user = "NULL"
//! smtp_pass = "NULL"
//! smtp_tls = 0
//! ```
//!
//! It is validated once into an immutable [`Settings`] value that callers
//! pass to each component.

mod loader;
mod settings;

pub use loader::ConfigLoader;
pub use settings::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_SMTP_TIMEOUT_SECS, DEFAULT_TABLE_ID, DashboardSettings,
    NotificationSettings, Settings, SmtpCredentials, Thresholds, UNSET_SENTINEL,
};
