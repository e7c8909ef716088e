//! Notification record and dispatch response models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Event data submitted with a notification request.
///
/// Nothing is required and nothing is validated: fields a kind does not use
/// are ignored and missing ones degrade the rendered email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub student_name: Option<Field>,
    #[serde(default, rename = "studentID", deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub student_id: Option<Field>,
    /// Student address; recipient for every kind except admin notifications
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Field>,
    /// Reservation date
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub date: Option<Field>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub from_time: Option<Field>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub to_time: Option<Field>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub equipment: Option<Field>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub borrow_date: Option<Field>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub return_date: Option<Field>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub purpose: Option<Field>,
    /// Rejection reason, shown only when present
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub reason: Option<Field>,
    /// `Reservation` or `Borrow`, used by admin notifications
    #[serde(default, rename = "type", deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub request_type: Option<Field>,
}

impl NotificationRecord {
    /// Noun describing the request in admin notifications
    pub fn request_noun(&self) -> &str {
        match &self.request_type {
            Some(noun) if noun.is_truthy() => noun.as_str(),
            _ => "Request",
        }
    }
}

/// One submitted value: its text as interpolated, and whether a presence
/// check counts it as given.
///
/// Strings are given when non-empty. `null`, `false` and `0` keep their text
/// (`"null"`, `"false"`, `"0"`) but are never given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    text: String,
    truthy: bool,
}

impl Field {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_truthy(&self) -> bool {
        self.truthy
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        let truthy = !text.is_empty();
        Self { text, truthy }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Field::from(text),
            Value::Null => Field {
                text: "null".to_string(),
                truthy: false,
            },
            Value::Bool(flag) => Field {
                text: flag.to_string(),
                truthy: flag,
            },
            Value::Number(number) => Field {
                truthy: number.as_f64() != Some(0.0),
                text: number.to_string(),
            },
            other => Field {
                text: other.to_string(),
                truthy: true,
            },
        })
    }
}

/// A key that was sent is `Some`, even when its value is `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Field>, D::Error>
where
    D: Deserializer<'de>,
{
    Field::deserialize(deserializer).map(Some)
}

/// Acknowledgment returned after the transport accepted a message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub success: bool,
    /// Message-ID the email was sent under
    pub message_id: String,
    /// Address the email was sent to
    pub to: String,
    /// ISO 8601 UTC time of the send
    pub timestamp: String,
}
