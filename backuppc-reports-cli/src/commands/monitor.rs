//! Monitoring command.

use std::fmt::Write as _;
use std::path::Path;

use backuppc_reports_core::health::{HealthResult, Monitor, MonitorReport};
use backuppc_reports_core::notify::SmtpNotifier;

use crate::error::CliError;
use crate::format::{BOLD, RESET, highlight};
use crate::util::{load_hosts, load_settings, runtime};

/// Monitor command handler
pub fn cmd_monitor(config_path: &Path, dry_run: bool, color: bool) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let runtime = runtime()?;
    let notifier = SmtpNotifier::new(settings.notifications.clone());
    let hosts = runtime.block_on(load_hosts(&settings, &notifier))?;

    let monitor = Monitor::new(settings.thresholds, &notifier).with_dry_run(dry_run);
    let report = runtime.block_on(monitor.run(&hosts));

    println!("{}", format_report(&report, color));
    Ok(())
}

/// Format the per-host messages followed by the totals
#[must_use]
pub fn format_report(report: &MonitorReport, color: bool) -> String {
    let mut output = String::new();

    for host in &report.hosts {
        if host.outcome == HealthResult::Disabled {
            let _ = writeln!(output, "Ignoring host {} - disabled by user.", host.hostname);
        } else if let Some(notification) = host.outcome.notification(&host.hostname) {
            for line in notification.body.lines() {
                let _ = writeln!(output, "{}", highlight(line, true, color));
            }
        }
    }

    let tally = &report.tally;
    let (bold, reset) = if color { (BOLD, RESET) } else { ("", "") };
    let _ = writeln!(output);
    let _ = writeln!(output, "{bold}Total Hosts: {}{reset}", tally.total);
    let _ = writeln!(output, "Ignored Hosts: {}", tally.disabled);
    let _ = writeln!(output, "Healthy Hosts: {}", tally.healthy);
    let _ = writeln!(output, "Hosts with problems: {}", tally.violating);
    if tally.unreadable > 0 {
        let _ = writeln!(output, "Unreadable Hosts: {}", tally.unreadable);
    }
    if report.failed_notifications > 0 {
        let _ = writeln!(
            output,
            "Alerts not delivered: {}",
            report.failed_notifications
        );
    }

    output.trim_end().to_string()
}
