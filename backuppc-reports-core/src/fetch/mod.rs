//! Authenticated fetch of the `BackupPC` summary page.
//!
//! The fetcher only returns markup or a classified [`FetchError`]; alerting
//! on failure is left to the caller.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::config::DashboardSettings;
use crate::error::{FetchError, FetchResult};

/// User agent sent with every request
const USER_AGENT: &str = concat!("backuppc-reports/", env!("CARGO_PKG_VERSION"));

/// Fetches the dashboard page over HTTP(S) with basic authentication.
///
/// Certificate validation is disabled on purpose: `BackupPC` installations
/// commonly serve the admin interface with a self-signed certificate.
pub struct DashboardFetcher {
    client: reqwest::Client,
    url: String,
    username: String,
    password: SecretString,
    timeout: Duration,
}

impl DashboardFetcher {
    /// Builds a fetcher for the configured dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend cannot be initialised.
    pub fn new(settings: &DashboardSettings) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(true)
            .timeout(settings.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: settings.url.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            timeout: settings.timeout,
        })
    }

    /// Performs one GET and returns the response body.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] if the request exceeds the configured timeout
    /// - [`FetchError::HttpStatus`] for non-2xx responses
    /// - [`FetchError::Connection`] for any other transport failure
    pub async fn fetch(&self) -> FetchResult<String> {
        tracing::debug!(url = %self.url, "Fetching BackupPC summary page");

        let response = self
            .client
            .get(&self.url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "BackupPC answered with an error status");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(&e))?;
        tracing::info!(bytes = body.len(), "Fetched BackupPC summary page");
        Ok(body)
    }

    fn classify(&self, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            tracing::error!(timeout_secs = self.timeout.as_secs(), "BackupPC request timed out");
            FetchError::Timeout(self.timeout.as_secs())
        } else {
            tracing::error!(error = %err, "BackupPC request failed");
            FetchError::Connection(describe(err))
        }
    }
}

/// Flattens an error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
