//! Dashboard fetch against a local HTTP server.

use std::time::Duration;

use backuppc_reports_core::error::FetchError;
use backuppc_reports_core::fetch::DashboardFetcher;
use backuppc_reports_core::notify::{Notification, fetch_or_alert};

use super::support::{RecordingNotifier, dashboard, http_response, serve_once};

/// A local port nothing listens on
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn fetch_returns_body_and_sends_basic_auth() {
    let (url, server) = serve_once(
        http_response("200 OK", "<html>hello</html>"),
        Duration::ZERO,
    )
    .await;

    let fetcher = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(5))).unwrap();
    let body = fetcher.fetch().await.unwrap();
    assert_eq!(body, "<html>hello</html>");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /backuppc/index.cgi"));
    let auth = request
        .lines()
        .find(|l| l.to_ascii_lowercase().starts_with("authorization:"))
        .expect("request carries an Authorization header");
    // base64("admin:secret")
    assert!(auth.ends_with("Basic YWRtaW46c2VjcmV0"), "got {auth}");
}

#[tokio::test]
async fn slow_server_is_a_timeout() {
    let (url, _server) = serve_once(
        http_response("200 OK", "late"),
        Duration::from_secs(5),
    )
    .await;

    let fetcher = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(1))).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout(1)), "got {err:?}");

    let alert = Notification::fetch_failure(&err);
    assert!(alert.subject.contains("Timeout"));
}

#[tokio::test]
async fn unauthorized_is_http_status_error() {
    let (url, _server) = serve_once(
        http_response("401 Unauthorized", "denied"),
        Duration::ZERO,
    )
    .await;

    let fetcher = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(5))).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    match err {
        FetchError::HttpStatus { status, ref reason } => {
            assert_eq!(status, 401);
            assert_eq!(reason, "Unauthorized");
        }
        ref other => panic!("expected HTTP status error, got {other:?}"),
    }

    let alert = Notification::fetch_failure(&err);
    assert_eq!(alert.subject, "BackupPc Monitor - Error connecting to BackupPc");
    assert!(alert.body.ends_with("BackupPC answered HTTP 401 - Unauthorized"));
}

#[tokio::test]
async fn successful_fetch_sends_no_alert() {
    let (url, _server) = serve_once(http_response("200 OK", "ok"), Duration::ZERO).await;
    let fetcher = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(5))).unwrap();

    let notifier = RecordingNotifier::default();
    assert_eq!(fetch_or_alert(&fetcher, &notifier).await.unwrap(), "ok");
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn timed_out_fetch_sends_one_timeout_alert() {
    let (url, _server) = serve_once(http_response("200 OK", "late"), Duration::from_secs(5)).await;
    let fetcher = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(1))).unwrap();

    let notifier = RecordingNotifier::default();
    let err = fetch_or_alert(&fetcher, &notifier).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout(1)), "got {err:?}");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "BackupPc Monitor - Timeout connecting to BackupPc");
}

#[tokio::test]
async fn refused_connection_sends_one_connection_alert() {
    let url = format!("http://127.0.0.1:{}/backuppc/index.cgi", closed_port());
    let fetcher = DashboardFetcher::new(&dashboard(&url, Duration::from_secs(5))).unwrap();

    let notifier = RecordingNotifier::default();
    let err = fetch_or_alert(&fetcher, &notifier).await.unwrap_err();
    assert!(matches!(err, FetchError::Connection(_)), "got {err:?}");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "BackupPc Monitor - Error connecting to BackupPc");
}
