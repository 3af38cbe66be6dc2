use crate::domain::errors::AppError;
use anyhow::Context;
use prometheus::{Encoder, TextEncoder, default_registry};

pub(crate) async fn prometheus_metrics() -> Result<String, AppError> {
    let metric_families = default_registry().gather();
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .context("failed to encode metrics")
        .map_err(AppError::Telemetry)?;
    String::from_utf8(buffer)
        .context("metrics are not valid UTF-8")
        .map_err(AppError::Telemetry)
}
