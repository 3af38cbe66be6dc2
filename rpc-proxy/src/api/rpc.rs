use crate::api::AppState;
use crate::domain::errors::AppError;
use crate::domain::relay_rpc;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use rpc_relay_core::Transport;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct RpcQuery {
    #[serde(rename = "chainId")]
    chain_id: Option<String>,
}

/// Relays a JSON-RPC body to the upstreams of `?chainId=`. Mirrors the upstream status and JSON
/// body; every failure is a `500` with a JSON string.
pub(crate) async fn rpc<T: Transport>(
    State(state): State<AppState<T>>,
    query: Result<Query<RpcQuery>, QueryRejection>,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let chain_id = query.ok().and_then(|Query(query)| query.chain_id);
    debug!(?chain_id, "Request to RPC");

    let relayed = relay_rpc(&state.config, &state.relay, chain_id.as_deref(), &body).await?;
    Ok((relayed.status, Json(relayed.body)))
}
