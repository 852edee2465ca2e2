//! Shared helpers used across command modules.

use std::path::Path;

use backuppc_reports_core::config::{ConfigLoader, Settings};
use backuppc_reports_core::extract::TableExtractor;
use backuppc_reports_core::fetch::DashboardFetcher;
use backuppc_reports_core::models::HostTable;
use backuppc_reports_core::notify::{Notifier, fetch_or_alert};
use tokio::runtime::Runtime;

use crate::error::CliError;

/// Loads and validates the configuration file
pub fn load_settings(config_path: &Path) -> Result<Settings, CliError> {
    tracing::info!(path = %config_path.display(), "Using config file");
    Ok(ConfigLoader::load(config_path)?)
}

/// Single-threaded runtime for the network calls of one command
pub fn runtime() -> Result<Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(format!("Failed to create tokio runtime: {e}")))
}

/// Fetches the dashboard and extracts its host table.
///
/// A failed fetch is reported through `notifier`, best effort, before the
/// error is returned.
pub async fn load_hosts(settings: &Settings, notifier: &dyn Notifier) -> Result<HostTable, CliError> {
    let fetcher = DashboardFetcher::new(&settings.dashboard)?;
    let markup = fetch_or_alert(&fetcher, notifier).await?;

    let hosts = TableExtractor::new(settings.dashboard.table_id.as_str()).extract(&markup)?;
    tracing::debug!(hosts = hosts.len(), "Host table extracted");
    Ok(hosts)
}
