//! Threshold checks for a single host.

use std::fmt;

use crate::config::Thresholds;
use crate::error::DataQualityError;
use crate::models::{HostField, HostStatus};
use crate::notify::Notification;

/// Which backup age a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeCheck {
    /// Days since the last full backup
    FullBackup,
    /// Days since the last incremental backup
    IncrementalBackup,
    /// Days since the last backup of any kind
    LastBackup,
}

impl AgeCheck {
    /// All checks in evaluation order
    pub const ALL: [Self; 3] = [Self::FullBackup, Self::IncrementalBackup, Self::LastBackup];

    /// Record field holding the age for this check
    #[must_use]
    pub const fn field(self) -> HostField {
        match self {
            Self::FullBackup => HostField::FullBackupAge,
            Self::IncrementalBackup => HostField::IncrementalBackupAge,
            Self::LastBackup => HostField::LastBackupAge,
        }
    }

    /// Configured maximum for this check
    #[must_use]
    pub const fn limit(self, thresholds: &Thresholds) -> u32 {
        match self {
            Self::FullBackup => thresholds.max_full_backup_age,
            Self::IncrementalBackup => thresholds.max_incr_backup_age,
            Self::LastBackup => thresholds.max_last_backup_age,
        }
    }

    /// Wording used in violation messages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FullBackup => "last full backup",
            Self::IncrementalBackup => "last incremental backup",
            Self::LastBackup => "last backup",
        }
    }
}

/// One failed age check
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Host the violation belongs to
    pub hostname: String,
    /// Which check failed
    pub check: AgeCheck,
    /// Age as displayed by the dashboard
    pub actual: String,
    /// Configured maximum in days
    pub expected: u32,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: The {} of server '{}' is older ({} days) than expected ({} days).",
            self.check.description(),
            self.hostname,
            self.actual,
            self.expected
        )
    }
}

/// Outcome of evaluating one host
#[derive(Debug, Clone, PartialEq)]
pub enum HealthResult {
    /// Host is auto-disabled and was not checked
    Disabled,
    /// All checks passed
    Healthy,
    /// One or more checks failed
    Violating(Vec<Violation>),
    /// At least one age field could not be read; counted as a problem host
    Unreadable {
        /// One entry per unreadable age field
        faults: Vec<DataQualityError>,
        /// Violations found by the checks that could run
        violations: Vec<Violation>,
    },
}

impl HealthResult {
    /// Violations found, whether or not other fields were unreadable
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Violating(v) | Self::Unreadable { violations: v, .. } => v,
            Self::Disabled | Self::Healthy => &[],
        }
    }

    /// Data-quality faults, empty unless the host is unreadable
    #[must_use]
    pub fn faults(&self) -> &[DataQualityError] {
        match self {
            Self::Unreadable { faults, .. } => faults,
            _ => &[],
        }
    }

    /// Alert for this host, if it has a problem
    #[must_use]
    pub fn notification(&self, hostname: &str) -> Option<Notification> {
        match self {
            Self::Violating(violations) => Some(Notification::host_problems(hostname, violations)),
            Self::Unreadable { faults, violations } => {
                Some(Notification::unreadable_host(hostname, faults, violations))
            }
            Self::Disabled | Self::Healthy => None,
        }
    }
}

/// Evaluates one host against the thresholds.
///
/// Auto-disabled hosts short-circuit to [`HealthResult::Disabled`]. Otherwise
/// all three age checks run: violations accumulate, and an age field that is
/// not a non-negative number is recorded as a fault without skipping the
/// remaining checks.
#[must_use]
pub fn evaluate(host: &HostStatus, thresholds: &Thresholds) -> HealthResult {
    if host.is_auto_disabled() {
        return HealthResult::Disabled;
    }

    let mut violations = Vec::new();
    let mut faults = Vec::new();
    for check in AgeCheck::ALL {
        let age = match host.real(check.field()) {
            Ok(age) => age,
            Err(fault) => {
                faults.push(fault);
                continue;
            }
        };
        let limit = check.limit(thresholds);
        if age > f64::from(limit) {
            violations.push(Violation {
                hostname: host.hostname.clone(),
                check,
                actual: host.field(check.field()).to_string(),
                expected: limit,
            });
        }
    }

    if !faults.is_empty() {
        HealthResult::Unreadable { faults, violations }
    } else if violations.is_empty() {
        HealthResult::Healthy
    } else {
        HealthResult::Violating(violations)
    }
}

/// Whether a displayed age exceeds its limit; unparseable values never do
#[must_use]
pub fn exceeds(host: &HostStatus, check: AgeCheck, thresholds: &Thresholds) -> bool {
    host.real(check.field())
        .is_ok_and(|age| age > f64::from(check.limit(thresholds)))
}
