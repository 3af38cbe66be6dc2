mod api;
mod cli;
mod config;
mod domain;
mod telemetry;

use crate::api::{AppState, router};
use crate::cli::Cli;
use crate::config::RelayConfig;
use crate::telemetry::init_telemetry;
use anyhow::{Context, Result};
use clap::Parser;
use rpc_relay_core::{FallbackRelay, HttpTransport};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();
    let cli = Cli::parse();

    let config = RelayConfig::from_cli(&cli)?;
    config.log_summary();

    let transport = HttpTransport::new(Duration::from_millis(cli.upstream_timeout_ms));
    let state = AppState::new(config, FallbackRelay::new(transport));

    let app = router::<HttpTransport>().layer(TraceLayer::new_for_http()).with_state(state);

    let listener = TcpListener::bind(&cli.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind_addr))?;

    info!(
        bind_addr = %cli.bind_addr,
        upstream_timeout_ms = cli.upstream_timeout_ms,
        "starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}
