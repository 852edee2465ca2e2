//! SMTP delivery via `lettre`.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use super::{Notification, Notifier};
use crate::config::NotificationSettings;
use crate::error::{NotificationError, NotificationResult};

/// Sends plain-text alerts through the configured SMTP server
pub struct SmtpNotifier {
    settings: NotificationSettings,
}

impl SmtpNotifier {
    /// Creates a notifier for the given settings
    #[must_use]
    pub const fn new(settings: NotificationSettings) -> Self {
        Self { settings }
    }

    /// Assembles the MIME message without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Address`] for unparseable addresses and
    /// [`NotificationError::Build`] if the message cannot be assembled.
    pub fn build_message(&self, notification: &Notification) -> NotificationResult<Message> {
        let from: Mailbox = self.settings.from.parse()?;
        let to: Mailbox = self.settings.to.parse()?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| NotificationError::Build(e.to_string()))
    }

    fn transport(&self) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let settings = &self.settings;

        let builder = if settings.use_starttls {
            tracing::debug!(server = %settings.server, "Using STARTTLS for SMTP");
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.server.as_str())
        };

        let mut builder = builder
            .port(settings.port)
            .timeout(Some(settings.timeout));

        if let Some(ref creds) = settings.credentials {
            tracing::debug!(user = %creds.username, "Using USER/PASS for SMTP");
            builder = builder.credentials(Credentials::new(
                creds.username.clone(),
                creds.password.expose_secret().to_string(),
            ));
        }

        Ok(builder.build())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, notification: &Notification) -> NotificationResult<()> {
        let message = self.build_message(notification)?;
        self.transport()?.send(message).await?;
        tracing::debug!(
            to = %self.settings.to,
            server = %self.settings.server,
            port = self.settings.port,
            "SMTP delivery complete"
        );
        Ok(())
    }
}
