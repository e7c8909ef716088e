//! Human-readable status page served at `/`

use axum::{extract::State, response::Html};

use super::health::SERVICE_NAME;
use crate::{notifications::NotificationKind, templates::BRAND_RED, AppState};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let endpoints: String = NotificationKind::ALL
        .iter()
        .map(|kind| format!("/api/email/{}", kind.slug()))
        .map(|path| endpoint("POST", &path))
        .chain(std::iter::once(endpoint("GET", "/api/health")))
        .collect();

    Html(format!(
        r#"<html>
<head>
    <title>UAEU Email Service</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; }}
        h1 {{ color: {BRAND_RED}; }}
        .endpoint {{ background: #f5f5f5; padding: 10px; margin: 10px 0; border-left: 4px solid {BRAND_RED}; }}
    </style>
</head>
<body>
    <h1>🎉 {SERVICE_NAME}</h1>
    <p><strong>Status:</strong> ✅ Running</p>
    <p><strong>Version:</strong> {version}</p>
    <p><strong>SMTP Provider:</strong> {provider}</p>

    <h2>📋 Available Endpoints:</h2>
{endpoints}
    <p><em>🔐 This is a backend service. Please use the official UAEU Media Studio frontend.</em></p>
</body>
</html>
"#,
        version = env!("CARGO_PKG_VERSION"),
        provider = state.config.email.provider,
    ))
}

fn endpoint(method: &str, path: &str) -> String {
    format!("    <div class=\"endpoint\"><strong>{method}</strong> {path}</div>\n")
}
