//! Fetch → extract → monitor round trips.

use std::time::Duration;

use backuppc_reports_core::config::Thresholds;
use backuppc_reports_core::extract::TableExtractor;
use backuppc_reports_core::fetch::DashboardFetcher;
use backuppc_reports_core::health::{HealthResult, Monitor, MonitorTally};
use backuppc_reports_core::models::HostField;

use super::support::{
    RecordingNotifier, dashboard, host_row, http_response, serve_once, summary_page,
};

const MAX_FULL: u32 = 7;

fn thresholds() -> Thresholds {
    Thresholds::new(MAX_FULL, 2, 2)
}

#[tokio::test]
async fn one_stale_host_raises_one_alert() {
    let page = summary_page(&[
        host_row("healthy01", "3.1", "0.5", "0.5", "idle"),
        host_row("stale01", "9.8", "0.5", "0.5", "idle"),
    ]);
    let hosts = TableExtractor::new("host_summary_backups")
        .extract(&page)
        .unwrap();

    let notifier = RecordingNotifier::default();
    let report = Monitor::new(thresholds(), &notifier).run(&hosts).await;

    assert_eq!(report.tally.total, 2);
    assert_eq!(report.tally.disabled, 0);
    assert_eq!(report.tally.violating, 1);
    assert!(report.tally.is_consistent());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("stale01"));
    assert!(sent[0].body.contains("older (9.8 days) than expected (7 days)"));
}

#[tokio::test]
async fn served_page_flows_through_the_whole_pipeline() {
    let page = summary_page(&[
        host_row("alpha", "1.0", "0.2", "0.2", "idle"),
        host_row("beta", "12.0", "4.0", "4.0", "idle"),
        host_row("gamma", "40.0", "40.0", "40.0", "auto disabled"),
        host_row("delta", "1.0", "&nbsp;", "0.2", "idle"),
    ]);
    let (url, _server) = serve_once(http_response("200 OK", &page), Duration::ZERO).await;

    let markup = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(5)))
        .unwrap()
        .fetch()
        .await
        .unwrap();
    let hosts = TableExtractor::new("host_summary_backups")
        .extract(&markup)
        .unwrap();
    assert_eq!(hosts.len(), 4);
    assert_eq!(
        hosts.find_by_hostname("beta").unwrap().field(HostField::TransferSpeed),
        "31.02"
    );

    let notifier = RecordingNotifier::default();
    let report = Monitor::new(thresholds(), &notifier).run(&hosts).await;

    assert_eq!(
        report.tally,
        MonitorTally {
            total: 4,
            disabled: 1,
            healthy: 1,
            violating: 2,
            unreadable: 1,
        }
    );

    // beta fails all three checks but gets a single email
    let beta = &report.hosts[1];
    assert!(matches!(beta.outcome, HealthResult::Violating(ref v) if v.len() == 3));
    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].body.lines().count(), 3);
    assert!(sent[1].subject.ends_with("delta"));
}
