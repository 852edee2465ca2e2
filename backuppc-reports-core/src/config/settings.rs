//! Validated, immutable settings built from the configuration file.

use std::time::Duration;

use secrecy::SecretString;

/// Default request timeout for the dashboard fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default timeout for one SMTP dialogue
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

/// Element id of the host summary table on the `BackupPC` summary page
pub const DEFAULT_TABLE_ID: &str = "host_summary_backups";

/// Value of `smtp_user`/`smtp_pass` meaning "no SMTP authentication"
pub const UNSET_SENTINEL: &str = "NULL";

/// Everything the pipeline needs, loaded once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where and how to fetch the dashboard
    pub dashboard: DashboardSettings,
    /// Maximum acceptable backup ages
    pub thresholds: Thresholds,
    /// Mail delivery for alerts
    pub notifications: NotificationSettings,
}

/// Connection settings for the `BackupPC` web interface (`[backuppc]`)
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Summary page URL
    pub url: String,
    /// Basic-auth user
    pub username: String,
    /// Basic-auth password
    pub password: SecretString,
    /// Total request timeout
    pub timeout: Duration,
    /// Element id of the host summary table
    pub table_id: String,
}

/// Maximum backup ages in days (`[general]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Maximum days since the last full backup
    pub max_full_backup_age: u32,
    /// Maximum days since the last incremental backup
    pub max_incr_backup_age: u32,
    /// Maximum days since the last backup of any kind
    pub max_last_backup_age: u32,
}

impl Thresholds {
    /// Creates thresholds from the three maximum ages
    #[must_use]
    pub const fn new(full: u32, incr: u32, last: u32) -> Self {
        Self {
            max_full_backup_age: full,
            max_incr_backup_age: incr,
            max_last_backup_age: last,
        }
    }
}

/// SMTP delivery settings (`[notifications]`)
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// SMTP server host
    pub server: String,
    /// SMTP server port
    pub port: u16,
    /// SMTP credentials, present only when both user and password are set
    pub credentials: Option<SmtpCredentials>,
    /// Upgrade the connection with STARTTLS before sending
    pub use_starttls: bool,
    /// Timeout for one SMTP dialogue
    pub timeout: Duration,
}

/// SMTP login
#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    /// SMTP user
    pub username: String,
    /// SMTP password
    pub password: SecretString,
}

impl SmtpCredentials {
    /// Builds credentials only when neither value is the unset sentinel
    /// nor empty.
    #[must_use]
    pub fn from_pair(username: &str, password: &str) -> Option<Self> {
        let is_set = |v: &str| !v.is_empty() && v != UNSET_SENTINEL;
        if is_set(username) && is_set(password) {
            Some(Self {
                username: username.to_string(),
                password: SecretString::from(password.to_string()),
            })
        } else {
            None
        }
    }
}
