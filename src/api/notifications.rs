//! Notification email endpoints

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use chrono::SecondsFormat;

use super::NotificationBody;
use crate::{
    error::{AppError, AppResult},
    models::notification::{NotificationRecord, SendResponse},
    notifications::NotificationKind,
    AppState,
};

/// Render and send one notification email
///
/// `kind` is one of `reservation-confirmation`, `reservation-approved`,
/// `reservation-rejected`, `borrow-confirmation`, `borrow-approved`,
/// `borrow-rejected` or `admin-notification`. Admin notifications go to the
/// studio administrator; every other kind goes to the record's `email`.
#[utoipa::path(
    post,
    path = "/api/email/{kind}",
    tag = "email",
    params(("kind" = String, Path, description = "Notification kind")),
    request_body = NotificationRecord,
    responses(
        (status = 200, description = "Email accepted by the mail transport", body = SendResponse),
        (status = 404, description = "Unknown notification kind", body = crate::error::NotFoundResponse),
        (status = 500, description = "Email could not be sent", body = crate::error::SendFailureResponse)
    )
)]
pub async fn send_notification(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    uri: Uri,
    NotificationBody(record): NotificationBody,
) -> AppResult<Json<SendResponse>> {
    let kind: NotificationKind = kind
        .parse()
        .map_err(|_| AppError::NotFound(uri.path().to_string()))?;

    let receipt = state.services.dispatch.dispatch(kind, &record).await?;

    Ok(Json(SendResponse {
        success: true,
        message_id: receipt.message_id,
        to: receipt.to,
        timestamp: receipt.sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
