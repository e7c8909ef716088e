//! API handlers for the notification REST endpoints

pub mod health;
pub mod notifications;
pub mod openapi;
pub mod status;

use std::any::Any;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::notification::NotificationRecord, AppState};

/// Notification record read from a JSON or urlencoded form body.
///
/// Bodies of any other type, and empty bodies, give an empty record.
pub struct NotificationBody(pub NotificationRecord);

#[async_trait]
impl<S> FromRequest<S> for NotificationBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|essence| essence.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/x-www-form-urlencoded" {
            let Form(record) = Form::<NotificationRecord>::from_request(req, state).await?;
            return Ok(NotificationBody(record));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Internal(rejection.body_text()))?;

        let is_json = mime == "application/json" || mime.ends_with("+json");
        if !is_json || bytes.is_empty() {
            return Ok(NotificationBody(NotificationRecord::default()));
        }

        let Json(record) = Json::<NotificationRecord>::from_bytes(&bytes)?;
        Ok(NotificationBody(record))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    // Known paths answer other methods with the same 404 as unknown ones
    let app = Router::new()
        .route("/", get(status::index).fallback(not_found))
        .route("/api/health", get(health::health_check).fallback(not_found))
        .route(
            "/api/email/:kind",
            post(notifications::send_notification).fallback(not_found),
        )
        .with_state(state);

    Router::new()
        .merge(app)
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    AppError::Internal(message).into_response()
}
