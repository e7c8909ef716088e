//! Business logic services

pub mod dispatch;

use std::sync::Arc;

use crate::{config::EmailConfig, mailer::MailSender};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub dispatch: dispatch::DispatchService,
}

impl Services {
    /// Create all services around the given mail sender
    pub fn new(sender: Arc<dyn MailSender>, email_config: EmailConfig) -> Self {
        Self {
            dispatch: dispatch::DispatchService::new(sender, email_config),
        }
    }
}
