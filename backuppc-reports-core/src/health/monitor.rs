//! One monitoring pass over every host of a fetch.

use super::evaluator::{HealthResult, evaluate};
use crate::config::Thresholds;
use crate::models::HostTable;
use crate::notify::{Notifier, send_best_effort};

/// Result for one host, in table order
#[derive(Debug, Clone, PartialEq)]
pub struct HostReport {
    /// Host name
    pub hostname: String,
    /// What the checks concluded
    pub outcome: HealthResult,
    /// Whether an alert email was delivered for this host
    pub notified: bool,
}

/// Counters for one pass.
///
/// `total == disabled + healthy + violating` always holds; `unreadable`
/// is the subset of `violating` whose data could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorTally {
    /// Hosts seen
    pub total: usize,
    /// Hosts skipped as auto-disabled
    pub disabled: usize,
    /// Hosts with no violation
    pub healthy: usize,
    /// Hosts with at least one violation or a data-quality fault
    pub violating: usize,
    /// Hosts with a data-quality fault
    pub unreadable: usize,
}

impl MonitorTally {
    fn record(&mut self, outcome: &HealthResult) {
        self.total += 1;
        match outcome {
            HealthResult::Disabled => self.disabled += 1,
            HealthResult::Healthy => self.healthy += 1,
            HealthResult::Violating(_) => self.violating += 1,
            HealthResult::Unreadable { .. } => {
                self.violating += 1;
                self.unreadable += 1;
            }
        }
    }

    /// Whether the counters add up
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.total == self.disabled + self.healthy + self.violating
    }
}

/// Outcome of a whole pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorReport {
    /// Per-host results in table order
    pub hosts: Vec<HostReport>,
    /// Counters
    pub tally: MonitorTally,
    /// Alerts that could not be delivered
    pub failed_notifications: usize,
}

impl MonitorReport {
    /// Alerts successfully delivered
    #[must_use]
    pub fn sent_notifications(&self) -> usize {
        self.hosts.iter().filter(|h| h.notified).count()
    }
}

/// Evaluates every host and alerts once per problem host.
///
/// Hosts are processed serially in table order. A host whose data cannot be
/// read, or whose alert cannot be delivered, does not stop the pass.
pub struct Monitor<'a> {
    thresholds: Thresholds,
    notifier: &'a dyn Notifier,
    dry_run: bool,
}

impl<'a> Monitor<'a> {
    /// Creates a monitor that delivers alerts through `notifier`
    #[must_use]
    pub fn new(thresholds: Thresholds, notifier: &'a dyn Notifier) -> Self {
        Self {
            thresholds,
            notifier,
            dry_run: false,
        }
    }

    /// Evaluates without sending any alert
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the pass.
    pub async fn run(&self, hosts: &HostTable) -> MonitorReport {
        let mut report = MonitorReport::default();

        for host in hosts {
            let outcome = evaluate(host, &self.thresholds);
            report.tally.record(&outcome);

            match &outcome {
                HealthResult::Disabled => {
                    tracing::info!(host = %host.hostname, "Ignoring host - disabled by user");
                }
                HealthResult::Healthy => {
                    tracing::debug!(host = %host.hostname, "Host backups are up to date");
                }
                HealthResult::Violating(violations) => {
                    tracing::warn!(
                        host = %host.hostname,
                        violations = violations.len(),
                        "Host backups are older than expected"
                    );
                }
                HealthResult::Unreadable { faults, violations } => {
                    for fault in faults {
                        tracing::error!(host = %host.hostname, error = %fault, "Cannot evaluate age field");
                    }
                    if !violations.is_empty() {
                        tracing::warn!(
                            host = %host.hostname,
                            violations = violations.len(),
                            "Host backups are older than expected"
                        );
                    }
                }
            }

            let mut notified = false;
            if let Some(notification) = outcome.notification(&host.hostname) {
                if self.dry_run {
                    tracing::info!(subject = %notification.subject, "Dry run, alert not sent");
                } else if send_best_effort(self.notifier, &notification).await {
                    notified = true;
                } else {
                    report.failed_notifications += 1;
                }
            }

            report.hosts.push(HostReport {
                hostname: host.hostname.clone(),
                outcome,
                notified,
            });
        }

        tracing::info!(
            total = report.tally.total,
            disabled = report.tally.disabled,
            violating = report.tally.violating,
            "Monitoring pass complete"
        );
        report
    }
}
