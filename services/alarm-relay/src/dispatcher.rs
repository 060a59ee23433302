//! Slack dispatcher: formats an alarm and delivers it to the webhook

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::envelope::AlarmRecord;
use crate::io::HttpClient;
use crate::slack::SlackMessage;

const NOT_CONFIGURED: &str = "No Slack webhook configured";

/// Caller-visible outcome of one invocation.
///
/// `body` holds JSON-encoded text, e.g. `"\"Message sent to Slack: 200\""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    pub status_code: u16,
    pub body: String,
}

impl DeliveryResult {
    /// Result returned when no webhook is configured
    pub fn not_configured() -> Self {
        Self {
            status_code: 200,
            body: json_text(NOT_CONFIGURED),
        }
    }

    /// Result for a completed webhook call
    pub fn sent(status: u16) -> Self {
        Self {
            status_code: status,
            body: json_text(&format!("Message sent to Slack: {}", status)),
        }
    }
}

fn json_text(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Delivers alarms to a Slack incoming webhook
pub struct SlackDispatcher {
    webhook_url: Option<String>,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SlackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackDispatcher")
            .field("configured", &self.webhook_url.is_some())
            .finish()
    }
}

impl SlackDispatcher {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        let webhook_url = config.webhook_url().map(str::to_owned);
        tracing::debug!(
            "Created SlackDispatcher (webhook configured: {})",
            webhook_url.is_some()
        );

        Self { webhook_url, http }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Short-circuit result for a relay without a webhook
    pub fn skip(&self) -> DeliveryResult {
        tracing::warn!("No Slack webhook configured, alarm not delivered");
        DeliveryResult::not_configured()
    }

    /// Send the alarm to Slack.
    ///
    /// Makes at most one HTTP call. Without a webhook this is a no-op that
    /// still reports success. The remote status is passed through as-is;
    /// only transport failures are errors.
    pub async fn dispatch(&self, alarm: &AlarmRecord) -> crate::Result<DeliveryResult> {
        let Some(url) = self.webhook_url.as_deref() else {
            return Ok(self.skip());
        };

        let message = SlackMessage::from_alarm(alarm);
        let payload = message.to_json()?;

        tracing::debug!("Sending Slack message: {}", message.text);
        let response = self.http.post_json(url, &payload).await?;

        tracing::info!(
            "Alarm '{}' delivered to Slack with status {}",
            alarm.name(),
            response.status
        );
        Ok(DeliveryResult::sent(response.status))
    }
}
