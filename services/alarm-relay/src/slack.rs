//! Slack message payload

use serde::{Deserialize, Serialize};

use crate::envelope::AlarmRecord;

/// Incoming-webhook message with a fallback text and Block Kit blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub text: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl SlackMessage {
    /// Build the alert message for an alarm. Values are inserted verbatim.
    pub fn from_alarm(alarm: &AlarmRecord) -> Self {
        let body = format!(
            "*Alert:* {}\n*Status:* {}\n*Reason:* {}",
            alarm.name(),
            alarm.state(),
            alarm.reason()
        );

        Self {
            text: format!("🚨 AWS Alert: {}", alarm.headline_name()),
            blocks: vec![Block::Section {
                text: TextObject::Mrkdwn { text: body },
            }],
        }
    }

    /// Text of the first section block, if any
    pub fn section_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Section {
                text: TextObject::Mrkdwn { text },
            } => Some(text.as_str()),
        })
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
