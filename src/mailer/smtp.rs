//! SMTP delivery through lettre's async transport

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};

use super::{new_message_id, MailError, MailSender, OutgoingEmail, SentMessage};
use crate::config::EmailConfig;

/// Sends messages through the configured SMTP relay.
///
/// The underlying transport pools its connections and is shared by every
/// in-flight request.
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailSender {
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let builder = if config.smtp_use_tls {
            // Use STARTTLS for secure connection
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host).map_err(
                |e| MailError::Transport(format!("Failed to create SMTP transport: {}", e)),
            )?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        }
        .port(config.smtp_port);

        let builder = if let (Some(username), Some(password)) =
            (&config.smtp_username, &config.smtp_password)
        {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            builder
        };

        Ok(Self {
            transport: builder.build(),
        })
    }

    /// Open a connection to the relay to check that it accepts us
    pub async fn verify(&self) -> Result<(), MailError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Transport(
                "SMTP server did not accept the connection".to_string(),
            )),
            Err(e) => Err(MailError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<SentMessage, MailError> {
        let message_id = new_message_id(&email.from_address);
        let message = build_message(&email, &message_id)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(SentMessage { message_id })
    }
}

/// Build the single-part HTML message lettre will transmit
fn build_message(email: &OutgoingEmail, message_id: &str) -> Result<Message, MailError> {
    let from_address: Address =
        email
            .from_address
            .parse()
            .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
                address: email.from_address.clone(),
                reason: e.to_string(),
            })?;
    let from = Mailbox::new(Some(email.from_name.clone()), from_address);

    let recipient = email.recipient()?;
    let to: Mailbox = recipient
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
            address: recipient.to_string(),
            reason: e.to_string(),
        })?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.as_str())
        .message_id(Some(message_id.to_string()))
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}
