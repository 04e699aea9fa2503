use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::domain::repository::Mailer;
use crate::error::AuthServiceError;

/// SMTP mailer. The transport is synchronous, so sends run on the blocking
/// thread pool. Transport errors are logged but never surfaced to callers
/// beyond a generic `DeliveryFailed`.
#[derive(Clone)]
pub struct SmtpMailer {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

impl SmtpMailer {
    fn build_transport(&self) -> Result<SmtpTransport, AuthServiceError> {
        let credentials = Credentials::new(self.username.clone(), self.password.clone());
        let transport = SmtpTransport::starttls_relay(&self.host)
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("smtp transport: {e}")))?
            .credentials(credentials)
            .build();
        Ok(transport)
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), AuthServiceError> {
        let from = self
            .from
            .parse()
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("from address: {e}")))?;
        let to = to.parse().map_err(|e| {
            AuthServiceError::Internal(anyhow::anyhow!("recipient address: {e}"))
        })?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("build message: {e}")))?;

        let transport = self.build_transport()?;
        let outcome = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("mail task join: {e}")))?;

        match outcome {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, "smtp send failed");
                Err(AuthServiceError::DeliveryFailed)
            }
        }
    }
}

impl Mailer for SmtpMailer {
    async fn send_otp(&self, to: &str, code: u32) -> Result<(), AuthServiceError> {
        let body = format!(
            "Your one-time code is {code}.\n\n\
             It expires in a few minutes. If you did not request a code, \
             you can safely ignore this email.\n"
        );
        self.send(to, "Your one-time code", body).await
    }

    async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), AuthServiceError> {
        let body = format!(
            "Open the link below to reset your password:\n\n{link}\n\n\
             If you did not request a password reset, you can safely ignore \
             this email.\n"
        );
        self.send(to, "Password reset request", body).await
    }
}
