//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, notifications};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UAEU Media Studio Email API",
        version = "1.0.0",
        description = "Reservation and equipment borrow notification emails",
        contact(name = "UAEU Media Studio", email = "uaeumediastudio@gmail.com")
    ),
    paths(
        health::health_check,
        notifications::send_notification,
    ),
    components(
        schemas(
            // Notifications
            crate::models::notification::NotificationRecord,
            crate::models::notification::SendResponse,
            // Health
            health::HealthResponse,
            health::SmtpHealth,
            crate::mailer::TransportStatus,
            // Errors
            crate::error::SendFailureResponse,
            crate::error::NotFoundResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "email", description = "Notification email dispatch")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
