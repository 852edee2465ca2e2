//! One row of the `BackupPC` host summary table.

use serde::Serialize;

use crate::error::DataQualityError;

/// Host state that tells monitoring to skip the host
pub const AUTO_DISABLED_STATE: &str = "auto disabled";

/// Columns of the host summary table, in dashboard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostField {
    /// Host name
    Hostname,
    /// Owning user
    User,
    /// Number of full backups
    FullBackupCount,
    /// Days since the last full backup
    FullBackupAge,
    /// Size of the last full backup in GB
    FullBackupSize,
    /// Transfer speed of the last full backup in MB/s
    TransferSpeed,
    /// Number of incremental backups
    IncrementalBackupCount,
    /// Days since the last incremental backup
    IncrementalBackupAge,
    /// Days since the last backup of any kind
    LastBackupAge,
    /// Free-text host state
    State,
    /// Transfer errors in the last backup
    TransferErrors,
    /// Last attempt, as displayed by the dashboard
    LastAttempt,
}

impl HostField {
    /// Number of columns in a data row
    pub const COUNT: usize = 12;

    /// All fields in column order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hostname,
        Self::User,
        Self::FullBackupCount,
        Self::FullBackupAge,
        Self::FullBackupSize,
        Self::TransferSpeed,
        Self::IncrementalBackupCount,
        Self::IncrementalBackupAge,
        Self::LastBackupAge,
        Self::State,
        Self::TransferErrors,
        Self::LastAttempt,
    ];

    /// Column header as rendered by the dashboard
    #[must_use]
    pub const fn column_header(self) -> &'static str {
        match self {
            Self::Hostname => "Host",
            Self::User => "User",
            Self::FullBackupCount => "#Full",
            Self::FullBackupAge => "Full Age (days)",
            Self::FullBackupSize => "Full Size (GB)",
            Self::TransferSpeed => "Speed (MB/s)",
            Self::IncrementalBackupCount => "#Incr",
            Self::IncrementalBackupAge => "Incr Age (days)",
            Self::LastBackupAge => "Last Backup (days)",
            Self::State => "State",
            Self::TransferErrors => "#Xfer errs",
            Self::LastAttempt => "Last attempt",
        }
    }

    /// Stable snake_case key used for JSON and CSV output
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hostname => "hostname",
            Self::User => "user",
            Self::FullBackupCount => "full_backup_count",
            Self::FullBackupAge => "full_backup_age_days",
            Self::FullBackupSize => "full_backup_size_gb",
            Self::TransferSpeed => "transfer_speed_mbps",
            Self::IncrementalBackupCount => "incremental_backup_count",
            Self::IncrementalBackupAge => "incremental_backup_age_days",
            Self::LastBackupAge => "last_backup_age_days",
            Self::State => "state",
            Self::TransferErrors => "transfer_error_count",
            Self::LastAttempt => "last_attempt",
        }
    }
}

impl std::fmt::Display for HostField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_header())
    }
}

/// Backup status of one host at the time of the fetch.
///
/// Every field is kept as the trimmed cell text. Numeric values are parsed
/// on demand through the typed accessors, which fail with a
/// [`DataQualityError`] instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostStatus {
    /// Host name, unique within one fetch
    pub hostname: String,
    /// Owning account name
    pub user: String,
    /// Number of full backups
    pub full_backup_count: String,
    /// Days since the last full backup
    pub full_backup_age_days: String,
    /// Size of the last full backup in GB
    pub full_backup_size_gb: String,
    /// Transfer speed in MB/s
    pub transfer_speed_mbps: String,
    /// Number of incremental backups
    pub incremental_backup_count: String,
    /// Days since the last incremental backup
    pub incremental_backup_age_days: String,
    /// Days since the last backup of any kind
    pub last_backup_age_days: String,
    /// Free-text host state
    pub state: String,
    /// Transfer errors in the last backup
    pub transfer_error_count: String,
    /// Last attempt, display only
    pub last_attempt: String,
}

impl HostStatus {
    /// Builds a record from the twelve cells of a table row, in column order.
    #[must_use]
    pub fn from_cells(cells: [String; HostField::COUNT]) -> Self {
        let [
            hostname,
            user,
            full_backup_count,
            full_backup_age_days,
            full_backup_size_gb,
            transfer_speed_mbps,
            incremental_backup_count,
            incremental_backup_age_days,
            last_backup_age_days,
            state,
            transfer_error_count,
            last_attempt,
        ] = cells;

        Self {
            hostname,
            user,
            full_backup_count,
            full_backup_age_days,
            full_backup_size_gb,
            transfer_speed_mbps,
            incremental_backup_count,
            incremental_backup_age_days,
            last_backup_age_days,
            state,
            transfer_error_count,
            last_attempt,
        }
    }

    /// Raw text of a field
    #[must_use]
    pub fn field(&self, field: HostField) -> &str {
        match field {
            HostField::Hostname => &self.hostname,
            HostField::User => &self.user,
            HostField::FullBackupCount => &self.full_backup_count,
            HostField::FullBackupAge => &self.full_backup_age_days,
            HostField::FullBackupSize => &self.full_backup_size_gb,
            HostField::TransferSpeed => &self.transfer_speed_mbps,
            HostField::IncrementalBackupCount => &self.incremental_backup_count,
            HostField::IncrementalBackupAge => &self.incremental_backup_age_days,
            HostField::LastBackupAge => &self.last_backup_age_days,
            HostField::State => &self.state,
            HostField::TransferErrors => &self.transfer_error_count,
            HostField::LastAttempt => &self.last_attempt,
        }
    }

    /// Whether the dashboard has stopped backing this host up by policy
    #[must_use]
    pub fn is_auto_disabled(&self) -> bool {
        self.state == AUTO_DISABLED_STATE
    }

    /// Parses a field as a non-negative, finite number of days/GB/MB.
    ///
    /// # Errors
    ///
    /// Returns [`DataQualityError`] if the cell is empty, not numeric,
    /// negative, or not finite.
    pub fn real(&self, field: HostField) -> Result<f64, DataQualityError> {
        let raw = self.field(field);
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| self.fault(field))
    }

    /// Days since the last full backup
    ///
    /// # Errors
    ///
    /// See [`HostStatus::real`].
    pub fn full_backup_age(&self) -> Result<f64, DataQualityError> {
        self.real(HostField::FullBackupAge)
    }

    /// Days since the last incremental backup
    ///
    /// # Errors
    ///
    /// See [`HostStatus::real`].
    pub fn incremental_backup_age(&self) -> Result<f64, DataQualityError> {
        self.real(HostField::IncrementalBackupAge)
    }

    /// Days since the last backup of any kind
    ///
    /// # Errors
    ///
    /// See [`HostStatus::real`].
    pub fn last_backup_age(&self) -> Result<f64, DataQualityError> {
        self.real(HostField::LastBackupAge)
    }

    fn fault(&self, field: HostField) -> DataQualityError {
        DataQualityError {
            hostname: self.hostname.clone(),
            field: field.column_header().to_string(),
            value: self.field(field).to_string(),
        }
    }
}
