//! Fake webhook transport for BDD scenarios

use std::sync::Mutex;

use alarm_relay::io::{HttpClient, HttpResponse};
use alarm_relay::RelayError;

/// How the fake webhook answers
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16),
    Unreachable,
}

/// Records every POST and answers with a fixed reply
#[derive(Debug)]
pub struct RecordingClient {
    reply: Reply,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingClient {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for RecordingClient {
    async fn post_json(&self, url: &str, body: &str) -> alarm_relay::Result<HttpResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), body.to_string()));

        match self.reply {
            Reply::Status(status) => Ok(HttpResponse { status }),
            Reply::Unreachable => Err(RelayError::Http("connection refused".to_string())),
        }
    }
}
