//! Loads the sectioned configuration file into [`Settings`].

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use super::settings::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_SMTP_TIMEOUT_SECS, DEFAULT_TABLE_ID, DashboardSettings,
    NotificationSettings, Settings, SmtpCredentials, Thresholds,
};
use crate::error::{ConfigError, ConfigResult};

/// Reads and validates configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads settings from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::Read`] if it cannot be read, and the errors of
    /// [`ConfigLoader::parse_str`] for its contents.
    pub fn load(path: &Path) -> ConfigResult<Settings> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;

        let settings = Self::parse_str(&content)?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(settings)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for syntax errors or missing keys and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn parse_str(content: &str) -> ConfigResult<Settings> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("{e}\n{TOML_SYNTAX_HINT}")))?;
        raw.validate()
    }
}

/// Appended to parse errors; INI-style files fail on unquoted strings
const TOML_SYNTAX_HINT: &str = "The config file is TOML: quote string values \
    (url = \"https://backup.example.com/backuppc/index.cgi\") and use true/false or 1/0 for smtp_tls.";

#[derive(Deserialize)]
struct RawConfig {
    backuppc: RawBackupPc,
    general: RawGeneral,
    notifications: RawNotifications,
}

#[derive(Deserialize)]
struct RawBackupPc {
    url: String,
    username: String,
    password: String,
    #[serde(default = "default_fetch_timeout")]
    timeout_secs: u64,
    #[serde(default = "default_table_id")]
    table_id: String,
}

#[derive(Deserialize)]
struct RawGeneral {
    max_full_backup_age: i64,
    max_incr_backup_age: i64,
    last_backup_age: i64,
}

#[derive(Deserialize)]
struct RawNotifications {
    email_to: String,
    email_from: String,
    smtp_server: String,
    smtp_port: i64,
    smtp_user: String,
    smtp_pass: String,
    smtp_tls: TlsFlag,
    #[serde(default = "default_smtp_timeout")]
    smtp_timeout_secs: u64,
}

/// `smtp_tls` is written either as a boolean or as `0`/`1`
#[derive(Deserialize)]
#[serde(untagged)]
enum TlsFlag {
    Bool(bool),
    Int(i64),
}

const fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

const fn default_smtp_timeout() -> u64 {
    DEFAULT_SMTP_TIMEOUT_SECS
}

fn default_table_id() -> String {
    DEFAULT_TABLE_ID.to_string()
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn positive_days(field: &str, value: i64) -> ConfigResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| invalid(field, format!("must be a positive integer, got {value}")))
}

fn non_empty(field: &str, value: String) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl RawConfig {
    fn validate(self) -> ConfigResult<Settings> {
        Ok(Settings {
            dashboard: self.backuppc.validate()?,
            thresholds: self.general.validate()?,
            notifications: self.notifications.validate()?,
        })
    }
}

impl RawBackupPc {
    fn validate(self) -> ConfigResult<DashboardSettings> {
        let url = non_empty("backuppc.url", self.url)?;
        let parsed = reqwest::Url::parse(&url).map_err(|e| invalid("backuppc.url", e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(
                "backuppc.url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("backuppc.timeout_secs", "must be greater than zero"));
        }

        Ok(DashboardSettings {
            url,
            username: self.username,
            password: SecretString::from(self.password),
            timeout: Duration::from_secs(self.timeout_secs),
            table_id: non_empty("backuppc.table_id", self.table_id)?,
        })
    }
}

impl RawGeneral {
    fn validate(self) -> ConfigResult<Thresholds> {
        Ok(Thresholds {
            max_full_backup_age: positive_days(
                "general.max_full_backup_age",
                self.max_full_backup_age,
            )?,
            max_incr_backup_age: positive_days(
                "general.max_incr_backup_age",
                self.max_incr_backup_age,
            )?,
            max_last_backup_age: positive_days("general.last_backup_age", self.last_backup_age)?,
        })
    }
}

impl RawNotifications {
    fn validate(self) -> ConfigResult<NotificationSettings> {
        let port = u16::try_from(self.smtp_port)
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                invalid(
                    "notifications.smtp_port",
                    format!("must be between 1 and 65535, got {}", self.smtp_port),
                )
            })?;

        let use_starttls = match self.smtp_tls {
            TlsFlag::Bool(b) => b,
            TlsFlag::Int(1) => true,
            TlsFlag::Int(0) => false,
            TlsFlag::Int(other) => {
                return Err(invalid(
                    "notifications.smtp_tls",
                    format!("expected true/false or 1/0, got {other}"),
                ));
            }
        };

        if self.smtp_timeout_secs == 0 {
            return Err(invalid(
                "notifications.smtp_timeout_secs",
                "must be greater than zero",
            ));
        }

        Ok(NotificationSettings {
            from: non_empty("notifications.email_from", self.email_from)?,
            to: non_empty("notifications.email_to", self.email_to)?,
            server: non_empty("notifications.smtp_server", self.smtp_server)?,
            port,
            credentials: SmtpCredentials::from_pair(&self.smtp_user, &self.smtp_pass),
            use_starttls,
            timeout: Duration::from_secs(self.smtp_timeout_secs),
        })
    }
}
