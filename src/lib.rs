//! UAEU Media Studio notification mail service
//!
//! Accepts studio reservation and equipment borrow events over a JSON API
//! and turns each into a branded HTML email delivered over SMTP.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod mailer;
pub mod models;
pub mod notifications;
pub mod services;
pub mod templates;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Result of the mail transport check made at startup
    pub mail_status: mailer::TransportStatus,
}
