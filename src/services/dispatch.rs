//! Notification dispatch: render, address and send one email per request

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    config::EmailConfig,
    error::AppResult,
    mailer::{MailSender, OutgoingEmail},
    models::notification::NotificationRecord,
    notifications::{Audience, NotificationKind},
    templates::{self, RenderContext},
};

/// Outcome of a send the transport accepted
#[derive(Debug, Clone)]
pub struct DispatchReceipt {
    pub message_id: String,
    pub to: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct DispatchService {
    sender: Arc<dyn MailSender>,
    config: Arc<EmailConfig>,
}

impl DispatchService {
    pub fn new(sender: Arc<dyn MailSender>, config: EmailConfig) -> Self {
        Self {
            sender,
            config: Arc::new(config),
        }
    }

    /// Build the email for a kind without sending it
    pub fn compose(&self, kind: NotificationKind, record: &NotificationRecord) -> OutgoingEmail {
        let ctx = RenderContext::now(&self.config.admin_email);

        let (from_name, to) = match kind.audience() {
            Audience::Student => (
                &self.config.smtp_from_name,
                record
                    .email
                    .as_ref()
                    .filter(|email| email.is_truthy())
                    .map(|email| email.as_str().to_string()),
            ),
            Audience::Administrator => (
                &self.config.system_from_name,
                Some(self.config.admin_email.clone()),
            ),
        };

        OutgoingEmail {
            from_name: from_name.clone(),
            from_address: self.config.smtp_from.clone(),
            to,
            subject: kind.subject(record),
            html: templates::render(kind, record, &ctx),
        }
    }

    /// Send the notification once; every failure comes back as a send error
    pub async fn dispatch(
        &self,
        kind: NotificationKind,
        record: &NotificationRecord,
    ) -> AppResult<DispatchReceipt> {
        let email = self.compose(kind, record);
        let to = email.to.clone().unwrap_or_default();

        match self.sender.send(email).await {
            Ok(sent) => {
                tracing::info!(
                    kind = %kind,
                    to = %to,
                    message_id = %sent.message_id,
                    "Notification sent"
                );
                Ok(DispatchReceipt {
                    message_id: sent.message_id,
                    to,
                    sent_at: Utc::now(),
                })
            }
            Err(e) => {
                tracing::error!(kind = %kind, to = %to, "Failed to send notification: {}", e);
                Err(e.into())
            }
        }
    }
}
