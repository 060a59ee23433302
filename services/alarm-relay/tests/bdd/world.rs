//! BDD test world for the alarm relay

use std::sync::Arc;

use alarm_relay::{DeliveryResult, SlackMessage};
use cucumber::World;

use crate::steps::transport::RecordingClient;

#[derive(Debug, Default, World)]
pub struct RelayWorld {
    pub webhook_url: Option<String>,
    pub transport: Option<Arc<RecordingClient>>,
    pub event: Option<String>,
    pub result: Option<alarm_relay::Result<DeliveryResult>>,
}

impl RelayWorld {
    /// The one message posted to the webhook
    pub fn posted_message(&self) -> SlackMessage {
        let transport = self.transport.as_ref().expect("no transport");
        let calls = transport.calls();
        assert_eq!(calls.len(), 1, "expected exactly one webhook call");
        serde_json::from_str(&calls[0].1).expect("posted body is not a Slack message")
    }
}
