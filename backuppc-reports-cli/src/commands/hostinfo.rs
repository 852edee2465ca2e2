//! Single host detail command.

use std::path::Path;

use backuppc_reports_core::config::Thresholds;
use backuppc_reports_core::health::{AgeCheck, exceeds};
use backuppc_reports_core::models::{HostField, HostStatus};
use backuppc_reports_core::notify::SmtpNotifier;

use crate::error::CliError;
use crate::format::{Cell, natural_widths, render_table};
use crate::util::{load_hosts, load_settings, runtime};

/// Label and field of each detail row, in display order
const DETAIL_ROWS: [(&str, HostField); HostField::COUNT] = [
    ("Hostname", HostField::Hostname),
    ("Username", HostField::User),
    ("# Full Backups", HostField::FullBackupCount),
    ("Last Full Backup Age", HostField::FullBackupAge),
    ("Full Backup Size (GB)", HostField::FullBackupSize),
    ("Transfer Speed (MB/s)", HostField::TransferSpeed),
    ("# Incremental Backups", HostField::IncrementalBackupCount),
    ("Last Incremental Backup Age", HostField::IncrementalBackupAge),
    ("Last Backup (Days Ago)", HostField::LastBackupAge),
    ("Host State", HostField::State),
    ("XFER Errors in Last Backup", HostField::TransferErrors),
    ("Last Attempt", HostField::LastAttempt),
];

/// Hostinfo command handler
pub fn cmd_hostinfo(config_path: &Path, server: &str, color: bool) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let notifier = SmtpNotifier::new(settings.notifications.clone());
    let hosts = runtime()?.block_on(load_hosts(&settings, &notifier))?;

    tracing::info!(host = server, "Searching for host");
    let host = hosts.find_by_hostname(server)?;

    println!("{}", format_detail(host, &settings.thresholds, color));
    Ok(())
}

/// Format all fields of one host as label/value rows.
///
/// The full and incremental backup ages are highlighted when they exceed
/// their limits.
#[must_use]
pub fn format_detail(host: &HostStatus, thresholds: &Thresholds, color: bool) -> String {
    let rows: Vec<Vec<Cell>> = DETAIL_ROWS
        .iter()
        .map(|(label, field)| {
            let alert = match field {
                HostField::FullBackupAge => exceeds(host, AgeCheck::FullBackup, thresholds),
                HostField::IncrementalBackupAge => {
                    exceeds(host, AgeCheck::IncrementalBackup, thresholds)
                }
                _ => false,
            };
            vec![Cell::plain(*label), Cell::flagged(host.field(*field), alert)]
        })
        .collect();

    let widths = natural_widths(&[], &rows);
    render_table(&[], &rows, &widths, color)
}
