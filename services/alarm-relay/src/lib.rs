//! Alarm relay - forwards monitoring alarms to Slack
//!
//! Unwraps an SNS-style envelope, formats the alarm as a Slack message and
//! posts it to an incoming webhook. One event in, at most one HTTP call out.

pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod io;
pub mod server;
pub mod slack;

pub use config::{load_config, Config};
pub use dispatcher::{DeliveryResult, SlackDispatcher};
pub use envelope::{unwrap_alarm, AlarmRecord, SnsEvent};
pub use error::{RelayError, Result};
pub use slack::SlackMessage;

use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::io::ReqwestHttpClient;

/// Relay one envelope: unwrap the first record and dispatch it.
///
/// The webhook check comes first, so an unconfigured relay reports
/// success without looking at the envelope at all.
pub async fn handle_event(
    event: &SnsEvent,
    dispatcher: &SlackDispatcher,
) -> Result<DeliveryResult> {
    if !dispatcher.is_configured() {
        return Ok(dispatcher.skip());
    }
    let alarm = unwrap_alarm(event)?;
    dispatcher.dispatch(&alarm).await
}

/// Relay one envelope given as raw JSON text
pub async fn handle_raw_event(raw: &str, dispatcher: &SlackDispatcher) -> Result<DeliveryResult> {
    if !dispatcher.is_configured() {
        return Ok(dispatcher.skip());
    }
    let event = SnsEvent::from_json(raw)?;
    handle_event(&event, dispatcher).await
}

/// Read one raw event from `path`, or from stdin when `path` is `None` or `-`
pub fn read_event(path: Option<&Path>) -> Result<String> {
    read_event_from(path, std::io::stdin())
}

/// Like [`read_event`] with an explicit reader standing in for stdin
pub fn read_event_from(path: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("Reading event from {:?}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("Reading event from stdin");
            let mut raw = String::new();
            stdin.read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Build a dispatcher backed by the production HTTP client
pub fn build_dispatcher(config: &Config) -> SlackDispatcher {
    SlackDispatcher::new(config, Arc::new(ReqwestHttpClient::new()))
}

/// Run the HTTP host until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let dispatcher = Arc::new(build_dispatcher(&config));
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Alarm relay listening on http://{}", addr);

    axum::serve(listener, server::build_router(dispatcher))
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Alarm relay stopped");
    Ok(())
}
