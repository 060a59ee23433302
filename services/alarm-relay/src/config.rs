//! Configuration types for the alarm relay

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Slack incoming-webhook URL. Absent or empty disables delivery.
    #[serde(default)]
    pub slack_webhook_url: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// The configured webhook, or `None` when absent or empty
    pub fn webhook_url(&self) -> Option<&str> {
        self.slack_webhook_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// Replace the file's webhook with one given on the command line or in
    /// the environment. `None` keeps the file's value.
    pub fn with_webhook_override(mut self, webhook_url: Option<String>) -> Self {
        if let Some(url) = webhook_url {
            tracing::debug!("Webhook URL overridden from command line/environment");
            self.slack_webhook_url = Some(url);
        }
        self
    }
}

/// HTTP host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    11120
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::RelayError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
