//! HTTP host: accepts one envelope per request and relays it

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dispatcher::{DeliveryResult, SlackDispatcher};
use crate::RelayError;

/// Server application state
#[derive(Clone)]
pub struct ServerState {
    pub dispatcher: Arc<SlackDispatcher>,
}

/// Build the relay axum router
pub fn build_router(dispatcher: Arc<SlackDispatcher>) -> Router {
    Router::new()
        .route("/events", post(events_handler))
        .route("/health", get(health_handler))
        .with_state(ServerState { dispatcher })
}

async fn events_handler(
    State(server): State<ServerState>,
    body: String,
) -> Result<Json<DeliveryResult>, InvocationFailure> {
    let result = crate::handle_raw_event(&body, &server.dispatcher).await?;
    Ok(Json(result))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// A fatal relay error, reported to the caller as a 500
pub struct InvocationFailure(RelayError);

impl From<RelayError> for InvocationFailure {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for InvocationFailure {
    fn into_response(self) -> Response {
        tracing::error!("Invocation failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
