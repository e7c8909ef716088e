//! Health check endpoint

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{mailer::TransportStatus, AppState};

pub const SERVICE_NAME: &str = "UAEU Media Studio Email Service";

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    pub service: String,
    /// Version of the service
    pub version: String,
    pub timestamp: String,
    pub smtp: SmtpHealth,
}

#[derive(Serialize, ToSchema)]
pub struct SmtpHealth {
    /// Mail provider label from configuration
    pub provider: String,
    /// Sender address
    pub sender: String,
    pub status: TransportStatus,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        smtp: SmtpHealth {
            provider: state.config.email.provider.clone(),
            sender: state.config.email.smtp_from.clone(),
            status: state.mail_status,
        },
    })
}
