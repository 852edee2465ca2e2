//! Email alerts
//!
//! [`Notification`] holds the subject and body templates; [`Notifier`] is the
//! delivery seam, implemented for SMTP by [`SmtpNotifier`]. Delivery is
//! best-effort: [`send_best_effort`] logs failures and never propagates them.

mod smtp;

use async_trait::async_trait;

pub use smtp::SmtpNotifier;

use crate::error::{DataQualityError, FetchError, FetchResult, NotificationResult};
use crate::fetch::DashboardFetcher;
use crate::health::Violation;

/// Subject prefix shared by every alert
pub const SUBJECT_PREFIX: &str = "BackupPc Monitor";

/// A plain-text email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl Notification {
    /// Creates a notification
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Alert sent when the dashboard cannot be fetched
    #[must_use]
    pub fn fetch_failure(err: &FetchError) -> Self {
        match err {
            FetchError::Timeout(_) => Self::new(
                format!("{SUBJECT_PREFIX} - Timeout connecting to BackupPc"),
                "Got a timeout error trying to connect to BackupPc.",
            ),
            other => Self::new(
                format!("{SUBJECT_PREFIX} - Error connecting to BackupPc"),
                format!("Got a error trying to connect to BackupPc\n\n{other}"),
            ),
        }
    }

    /// Alert for one host carrying all of its violations
    #[must_use]
    pub fn host_problems(hostname: &str, violations: &[Violation]) -> Self {
        let body = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(
            format!("{SUBJECT_PREFIX} - Problems found with server {hostname}"),
            body,
        )
    }

    /// Alert for a host with unreadable age fields.
    ///
    /// Lists one line per unreadable field, then every violation found by the
    /// checks that could still run.
    #[must_use]
    pub fn unreadable_host(
        hostname: &str,
        faults: &[DataQualityError],
        violations: &[Violation],
    ) -> Self {
        let body = faults
            .iter()
            .map(|fault| format!("ERROR: Could not check the backups of server '{hostname}'. {fault}"))
            .chain(violations.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(
            format!("{SUBJECT_PREFIX} - Problems found with server {hostname}"),
            body,
        )
    }
}

/// Delivers notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one notification.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::NotificationError`] if delivery fails.
    async fn send(&self, notification: &Notification) -> NotificationResult<()>;
}

/// Sends a notification, logging instead of propagating any failure.
///
/// Returns whether delivery succeeded.
pub async fn send_best_effort(notifier: &dyn Notifier, notification: &Notification) -> bool {
    match notifier.send(notification).await {
        Ok(()) => {
            tracing::info!(subject = %notification.subject, "Notification email sent");
            true
        }
        Err(e) => {
            tracing::error!(
                subject = %notification.subject,
                error = %e,
                "Error trying to send mail. Please check your SMTP settings."
            );
            false
        }
    }
}

/// Fetches the dashboard, alerting through `notifier` when the fetch fails.
///
/// The alert is best effort; the fetch error is returned either way.
///
/// # Errors
///
/// Returns the [`FetchError`] of the failed fetch.
pub async fn fetch_or_alert(
    fetcher: &DashboardFetcher,
    notifier: &dyn Notifier,
) -> FetchResult<String> {
    match fetcher.fetch().await {
        Ok(markup) => Ok(markup),
        Err(err) => {
            tracing::error!(error = %err, "Cannot fetch BackupPC dashboard");
            send_best_effort(notifier, &Notification::fetch_failure(&err)).await;
            Err(err)
        }
    }
}
