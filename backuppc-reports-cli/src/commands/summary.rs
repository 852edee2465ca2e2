//! Host summary command.

use std::fmt::Write as _;
use std::path::Path;

use backuppc_reports_core::models::{HostField, HostStatus, HostTable};
use backuppc_reports_core::notify::SmtpNotifier;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{Cell, MAX_TABLE_WIDTH, escape_csv_field, render_table, table_width};
use crate::util::{load_hosts, load_settings, runtime};

/// Column headers of the summary table
const SUMMARY_HEADER: [&str; 6] = [
    "Hostname",
    "Last Full Backup Age",
    "Last Incr. Backup Age",
    "Last Backup",
    "Last attempt",
    "State",
];

/// Content width of each summary column
const SUMMARY_WIDTHS: [usize; 6] = [20, 15, 10, 10, 10, 20];

const _: () = assert!(table_width(&SUMMARY_WIDTHS) <= MAX_TABLE_WIDTH);

/// Fields shown by the summary, in column order
const SUMMARY_FIELDS: [HostField; 6] = [
    HostField::Hostname,
    HostField::FullBackupAge,
    HostField::IncrementalBackupAge,
    HostField::LastBackupAge,
    HostField::LastAttempt,
    HostField::State,
];

/// Summary command handler
pub fn cmd_summary(config_path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let notifier = SmtpNotifier::new(settings.notifications.clone());
    let hosts = runtime()?.block_on(load_hosts(&settings, &notifier))?;

    match format {
        OutputFormat::Table => println!("{}", format_table(&hosts)),
        OutputFormat::Json => println!("{}", format_json(&hosts)?),
        OutputFormat::Csv => println!("{}", format_csv(&hosts)),
    }

    Ok(())
}

/// Format the host summary as a fixed-width table
#[must_use]
pub fn format_table(hosts: &HostTable) -> String {
    if hosts.is_empty() {
        return "No hosts found.".to_string();
    }

    let rows: Vec<Vec<Cell>> = hosts.iter().map(summary_row).collect();
    render_table(&SUMMARY_HEADER, &rows, &SUMMARY_WIDTHS, false)
}

fn summary_row(host: &HostStatus) -> Vec<Cell> {
    SUMMARY_FIELDS
        .iter()
        .map(|field| Cell::plain(host.field(*field)))
        .collect()
}

/// Format every host with all its fields as JSON
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json(hosts: &HostTable) -> Result<String, CliError> {
    serde_json::to_string_pretty(hosts.as_slice())
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}

/// Format every host with all its fields as CSV
#[must_use]
pub fn format_csv(hosts: &HostTable) -> String {
    let mut output = String::new();

    let header: Vec<&str> = HostField::ALL.iter().map(|f| f.key()).collect();
    let _ = writeln!(output, "{}", header.join(","));

    for host in hosts {
        let row: Vec<String> = HostField::ALL
            .iter()
            .map(|f| escape_csv_field(host.field(*f)))
            .collect();
        let _ = writeln!(output, "{}", row.join(","));
    }

    output.trim_end().to_string()
}
