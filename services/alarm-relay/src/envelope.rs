//! SNS envelope unwrapping
//!
//! The notification bus delivers `{"Records": [{"Sns": {"Message": "..."}}]}`
//! where `Message` is the alarm serialized as JSON text. Only the first record
//! is ever looked at.

use serde::{Deserialize, Deserializer, Serialize};

use crate::RelayError;

const DEFAULT_HEADLINE_NAME: &str = "Unknown Alarm";
const DEFAULT_NAME: &str = "Unknown";
const DEFAULT_STATE: &str = "Unknown";
const DEFAULT_REASON: &str = "No reason provided";

/// Inbound event as delivered by the notification bus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

/// One wrapped notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsNotification,
}

/// The SNS part of a record. Only `Message` matters; the rest is kept for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsNotification {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl SnsEvent {
    /// Parse a raw event document
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Wrap a single alarm payload in an envelope
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            records: vec![SnsRecord {
                sns: SnsNotification {
                    message: message.into(),
                    ..Default::default()
                },
            }],
        }
    }
}

/// A CloudWatch-style alarm, parsed from the SNS message text.
///
/// Every recognized field is optional. Use the accessors to get the value
/// with its default applied. A JSON `null` counts as absent, and a
/// non-string value is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmRecord {
    #[serde(default, deserialize_with = "display_text")]
    pub alarm_name: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub new_state_value: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub new_state_reason: Option<String>,
}

/// Strings as-is, `null` as absent, anything else as JSON text
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl AlarmRecord {
    /// Parse an alarm from the SNS message text, which must be a JSON object
    pub fn from_message(message: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(message)?;
        if !value.is_object() {
            let err: serde_json::Error = serde::de::Error::custom(format!(
                "alarm message must be a JSON object, got {}",
                json_kind(&value)
            ));
            return Err(RelayError::Json(err));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Alarm name as shown in the message headline
    pub fn headline_name(&self) -> &str {
        self.alarm_name.as_deref().unwrap_or(DEFAULT_HEADLINE_NAME)
    }

    /// Alarm name as shown in the message body
    pub fn name(&self) -> &str {
        self.alarm_name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// New alarm state, e.g. `ALARM` or `OK`
    pub fn state(&self) -> &str {
        self.new_state_value.as_deref().unwrap_or(DEFAULT_STATE)
    }

    /// Human-readable reason for the state change
    pub fn reason(&self) -> &str {
        self.new_state_reason.as_deref().unwrap_or(DEFAULT_REASON)
    }
}

/// Extract the alarm from the first record of the envelope.
///
/// Fails with [`RelayError::EmptyEnvelope`] when there are no records and
/// with [`RelayError::Json`] when the message text is not a JSON object.
pub fn unwrap_alarm(event: &SnsEvent) -> crate::Result<AlarmRecord> {
    let record = event.records.first().ok_or(RelayError::EmptyEnvelope)?;

    if event.records.len() > 1 {
        tracing::debug!(
            "Envelope carries {} records, ignoring all but the first",
            event.records.len()
        );
    }

    tracing::debug!(
        "Unwrapping SNS message id={:?} subject={:?} topic={:?}",
        record.sns.message_id,
        record.sns.subject,
        record.sns.topic_arn
    );

    AlarmRecord::from_message(&record.sns.message)
}
