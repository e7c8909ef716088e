//! Mail-sending capability
//!
//! The dispatch service only knows the [`MailSender`] trait. Two backends
//! implement it: [`SmtpMailSender`] for real delivery and [`LogMailSender`]
//! which writes the message to the log and reports success.

mod log;
mod smtp;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub use self::log::LogMailSender;
pub use self::smtp::SmtpMailSender;

/// A fully rendered email ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from_name: String,
    pub from_address: String,
    /// Recipient exactly as supplied; may be missing for student kinds
    pub to: Option<String>,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// The recipient address, or `MissingRecipient` when absent or blank
    pub fn recipient(&self) -> Result<&str, MailError> {
        match self.to.as_deref().map(str::trim) {
            Some(to) if !to.is_empty() => Ok(to),
            _ => Err(MailError::MissingRecipient),
        }
    }
}

/// What the transport reports back for an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: String,
}

/// Every failure a send attempt can produce
#[derive(Error, Debug)]
pub enum MailError {
    #[error("No recipients defined")]
    MissingRecipient,

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("{0}")]
    Transport(String),
}

/// Transport reachability as reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransportStatus {
    Connected,
    Unreachable,
    /// Log-only transport, nothing is delivered
    Disabled,
}

/// Transmits one email and returns the identifier it was sent under
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<SentMessage, MailError>;
}

/// Generate an RFC 5322 Message-ID scoped to the sender's domain
pub fn new_message_id(from_address: &str) -> String {
    let domain = from_address
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
        .unwrap_or("localhost");
    format!("<{}@{}>", Uuid::new_v4(), domain)
}
