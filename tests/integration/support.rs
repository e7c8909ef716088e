//! Test server with a recording mail sender

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use media_studio_mailer::{
    api,
    config::AppConfig,
    mailer::{MailError, MailSender, OutgoingEmail, SentMessage, TransportStatus},
    services::Services,
    AppState,
};

pub const ADMIN_EMAIL: &str = "admin@studio.test";

/// Records every email handed to it; optionally fails every send
#[derive(Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    failure: Option<String>,
}

impl RecordingSender {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingSender {
    async fn send(&self, email: OutgoingEmail) -> Result<SentMessage, MailError> {
        self.sent.lock().unwrap().push(email.clone());

        if let Some(message) = &self.failure {
            return Err(MailError::Transport(message.clone()));
        }
        email.recipient()?;

        let count = self.sent.lock().unwrap().len();
        Ok(SentMessage {
            message_id: format!("<test-{}@studio.test>", count),
        })
    }
}

/// Serve the application on 127.0.0.1 and return its base URL
pub async fn spawn_app(sender: RecordingSender) -> String {
    let mut config = AppConfig::default();
    config.email.smtp_from = "studio@studio.test".to_string();
    config.email.admin_email = ADMIN_EMAIL.to_string();

    let services = Services::new(Arc::new(sender), config.email.clone());
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        mail_status: TransportStatus::Connected,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, api::router(state))
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}
