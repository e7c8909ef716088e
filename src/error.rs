//! Error types for the Media Studio mail service

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::mailer::MailError;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The mail sender rejected or failed the message
    #[error(transparent)]
    Send(#[from] MailError),

    /// No route matched the request path
    #[error("Endpoint not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Body returned when a notification could not be sent
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SendFailureResponse {
    pub success: bool,
    /// Raw error text reported by the mail transport
    pub error: String,
}

/// Body returned for unmatched routes
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
    pub message: String,
}

/// Body returned for unexpected server faults
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Send(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendFailureResponse {
                    success: false,
                    error: e.to_string(),
                }),
            )
                .into_response(),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                Json(NotFoundResponse {
                    error: "Endpoint not found".to_string(),
                    path,
                    message: "Please check the API documentation".to_string(),
                }),
            )
                .into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal(msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
