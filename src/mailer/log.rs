//! Log-only sender for local development

use async_trait::async_trait;

use super::{new_message_id, MailError, MailSender, OutgoingEmail, SentMessage};

/// Writes each message to the log instead of sending it
#[derive(Debug, Clone, Default)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<SentMessage, MailError> {
        let to = email.recipient()?;
        let message_id = new_message_id(&email.from_address);

        tracing::info!(
            to = %to,
            subject = %email.subject,
            message_id = %message_id,
            bytes = email.html.len(),
            "Log transport: email not delivered"
        );

        Ok(SentMessage { message_id })
    }
}
