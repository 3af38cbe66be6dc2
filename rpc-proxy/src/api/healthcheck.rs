use crate::api::AppState;
use axum::Json;
use axum::extract::State;
use rpc_relay_core::Transport;
use rpc_relay_primitives::ChainId;
use strum::IntoEnumIterator;

#[derive(serde::Serialize)]
pub(crate) struct Health {
    status: &'static str,
    /// Supported chains no request can succeed for: no API key covers them and no custom
    /// endpoint is configured.
    chains_without_upstreams: Vec<ChainId>,
}

pub(crate) async fn healthcheck<T: Transport>(State(state): State<AppState<T>>) -> Json<Health> {
    let chains_without_upstreams = ChainId::iter()
        .filter(|chain_id| state.config.rpc_urls(*chain_id).is_empty())
        .collect::<Vec<_>>();
    let status = if chains_without_upstreams.is_empty() {
        "ok"
    } else {
        "degraded"
    };
    Json(Health {
        status,
        chains_without_upstreams,
    })
}
