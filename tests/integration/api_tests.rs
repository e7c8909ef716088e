//! API integration tests

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::support::{spawn_app, RecordingSender, ADMIN_EMAIL};

const KINDS: [&str; 7] = [
    "reservation-confirmation",
    "reservation-approved",
    "reservation-rejected",
    "borrow-confirmation",
    "borrow-approved",
    "borrow-rejected",
    "admin-notification",
];

fn reservation() -> Value {
    json!({
        "studentName": "Ali",
        "studentID": "123",
        "email": "a@b.com",
        "date": "2024-01-01",
        "fromTime": "10:00",
        "toTime": "11:00",
        "purpose": "filming"
    })
}

async fn post(base: &str, kind: &str, body: &Value) -> (StatusCode, Value) {
    let response = Client::new()
        .post(format!("{}/api/email/{}", base, kind))
        .json(body)
        .send()
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body: Value = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(RecordingSender::default()).await;

    let response = Client::new()
        .get(format!("{}/api/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "UAEU Media Studio Email Service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
    assert_eq!(body["smtp"]["provider"], "Gmail");
    assert_eq!(body["smtp"]["sender"], "studio@studio.test");
    assert_eq!(body["smtp"]["status"], "connected");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let base = spawn_app(RecordingSender::default()).await;

    let response = Client::new()
        .get(format!("{}/", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let page = response.text().await.expect("Failed to read body");
    for kind in KINDS {
        assert!(page.contains(&format!("/api/email/{}", kind)), "missing {kind}");
    }
    assert!(page.contains("/api/health"));
}

#[tokio::test]
async fn test_reservation_approved_example() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let (status, body) = post(&base, "reservation-approved", &reservation()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["to"], "a@b.com");
    assert!(body["messageId"].as_str().is_some_and(|id| !id.is_empty()));
    let timestamp = body["timestamp"].as_str().expect("No timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.as_deref(), Some("a@b.com"));
    assert!(sent[0].subject.contains("Approved"));
    assert!(sent[0].html.contains("Dear Ali,"));
}

#[tokio::test]
async fn test_every_kind_succeeds() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    for kind in KINDS {
        let (status, body) = post(&base, kind, &reservation()).await;
        assert_eq!(status, StatusCode::OK, "{kind}");
        assert_eq!(body["success"], true, "{kind}");
        assert!(body["messageId"].as_str().is_some_and(|id| !id.is_empty()));
    }

    assert_eq!(sender.sent().len(), KINDS.len());
}

#[tokio::test]
async fn test_every_kind_reports_transport_failure() {
    let sender = RecordingSender::failing("Invalid login: 535-5.7.8 Username and Password not accepted");
    let base = spawn_app(sender.clone()).await;

    for kind in KINDS {
        let (status, body) = post(&base, kind, &reservation()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{kind}");
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Invalid login: 535-5.7.8 Username and Password not accepted"
        );
    }

    // One attempt per request, no retries
    assert_eq!(sender.sent().len(), KINDS.len());
}

#[tokio::test]
async fn test_admin_notification_goes_to_administrator() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let record = json!({
        "type": "Borrow",
        "studentName": "Mariam",
        "studentID": "456",
        "email": "mariam@uaeu.test",
        "equipment": "Sony A7 III",
        "borrowDate": "2024-02-01",
        "returnDate": "2024-02-03",
        "purpose": "documentary"
    });
    let (status, body) = post(&base, "admin-notification", &record).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["to"], ADMIN_EMAIL);

    let sent = sender.sent();
    assert_eq!(sent[0].to.as_deref(), Some(ADMIN_EMAIL));
    assert_eq!(sent[0].from_name, "UAEU Media Studio System");
    assert!(sent[0].subject.contains("New Borrow Request"));
    assert!(sent[0].html.contains("<p><strong>Equipment:</strong> Sony A7 III</p>"));
    assert!(!sent[0].html.contains("<strong>Time:</strong>"));
}

#[tokio::test]
async fn test_missing_email_is_a_send_failure() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let (status, body) = post(&base, "borrow-confirmation", &json!({ "studentName": "Ali" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No recipients defined");
    assert_eq!(sender.sent().len(), 1);
}

#[tokio::test]
async fn test_duplicate_requests_send_duplicate_emails() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    post(&base, "reservation-confirmation", &reservation()).await;
    post(&base, "reservation-confirmation", &reservation()).await;

    assert_eq!(sender.sent().len(), 2);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let base = spawn_app(RecordingSender::default()).await;

    let response = Client::new()
        .get(format!("{}/api/reservations", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["path"], "/api/reservations");
}

#[tokio::test]
async fn test_wrong_method_on_email_route_returns_404() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let response = Client::new()
        .get(format!("{}/api/email/borrow-approved", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["path"], "/api/email/borrow-approved");
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_form_encoded_admin_notification_is_sent() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let response = Client::new()
        .post(format!("{}/api/email/admin-notification", base))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("type=Borrow&studentName=Ali&equipment=Tripod")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["to"], ADMIN_EMAIL);

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("New Borrow Request"));
    assert!(sent[0].html.contains("<p><strong>Equipment:</strong> Tripod</p>"));
    assert!(sent[0].html.contains("<p><strong>Student Name:</strong> Ali</p>"));
}

#[tokio::test]
async fn test_body_without_json_type_sends_with_empty_record() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let empty = Client::new()
        .post(format!("{}/api/email/admin-notification", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(empty.status(), StatusCode::OK);

    let text = Client::new()
        .post(format!("{}/api/email/admin-notification", base))
        .header("content-type", "text/plain")
        .body("studentName=Ali")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(text.status(), StatusCode::OK);

    let sent = sender.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[1].subject.contains("New Request Request"));
    assert!(sent[1].html.contains("<p><strong>Student Name:</strong> undefined</p>"));
}

#[tokio::test]
async fn test_malformed_json_is_an_internal_error() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let response = Client::new()
        .post(format!("{}/api/email/borrow-approved", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Internal Server Error");
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_falsy_json_values_omit_admin_lines() {
    let sender = RecordingSender::default();
    let base = spawn_app(sender.clone()).await;

    let record = json!({
        "type": "Borrow",
        "studentName": null,
        "equipment": false,
        "fromTime": 0
    });
    let (status, _) = post(&base, "admin-notification", &record).await;

    assert_eq!(status, StatusCode::OK);
    let sent = sender.sent();
    assert!(!sent[0].html.contains("Equipment:"));
    assert!(!sent[0].html.contains("<strong>Time:</strong>"));
    assert!(sent[0].html.contains("<p><strong>Student Name:</strong> null</p>"));
}
