use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use rpc_relay_core::RelayError;
use tracing::error;

pub(crate) const DEFAULT_API_ERROR_MESSAGE: &str = "Something went wrong. Sorry, try again later :(";

/// Every variant reaches the client the same way: `500` and the message as a JSON string.
#[derive(Debug, Error, Display)]
pub(crate) enum AppError {
    #[display("Chain {_0} is not supported")]
    UnsupportedChain(#[error(not(source))] String),
    Relay(RelayError),
    InvalidRequestBody(#[error(not(source))] anyhow::Error),
    InvalidUpstreamBody(#[error(not(source))] anyhow::Error),
    Telemetry(#[error(not(source))] anyhow::Error),
}

impl AppError {
    pub(crate) fn message(&self) -> String {
        let message = format!("{self:#}");
        if message.is_empty() {
            DEFAULT_API_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();
        error!(error = ?self, "{message}");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(message)).into_response()
    }
}
