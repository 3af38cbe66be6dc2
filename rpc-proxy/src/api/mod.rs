use crate::api::healthcheck::healthcheck;
use crate::api::rpc::rpc;
use crate::api::telemetry::prometheus_metrics;
use crate::config::RelayConfig;
use axum::Router;
use axum::routing::{any, get};
use rpc_relay_core::{FallbackRelay, HttpTransport, Transport};
use std::sync::Arc;

mod healthcheck;
mod rpc;
mod telemetry;

pub(crate) struct AppState<T: Transport = HttpTransport> {
    pub config: Arc<RelayConfig>,
    pub relay: Arc<FallbackRelay<T>>,
}

impl<T: Transport> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            relay: Arc::clone(&self.relay),
        }
    }
}

impl<T: Transport> AppState<T> {
    pub fn new(config: RelayConfig, relay: FallbackRelay<T>) -> Self {
        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        }
    }
}

pub(crate) fn router<T: Transport + 'static>() -> Router<AppState<T>> {
    Router::new()
        .route("/healthcheck", get(healthcheck::<T>))
        .route("/prometheus-metrics", get(prometheus_metrics))
        .route("/api/rpc", any(rpc::<T>))
}
