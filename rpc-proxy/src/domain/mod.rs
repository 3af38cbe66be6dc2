pub(crate) mod errors;

use crate::config::RelayConfig;
use crate::domain::errors::AppError;
use anyhow::Context;
use axum::body::Bytes;
use axum::http::StatusCode;
use rpc_relay_core::{FallbackRelay, Transport};
use rpc_relay_primitives::ChainId;
use tracing::instrument;

/// What the chosen upstream answered, already parsed as JSON.
#[derive(Debug, PartialEq)]
pub(crate) struct RelayedRpc {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

/// `chainId` comes straight from the query string and is read the way JavaScript's `Number()`
/// reads a string:
/// - a blank value is `0`;
/// - `0x` hex, decimals and exponents are accepted (`1.0` and `1e0` are chain 1);
/// - a missing parameter or anything non-numeric is `NaN`.
pub(crate) fn parse_chain_id(raw: Option<&str>) -> Result<ChainId, AppError> {
    let Some(raw) = raw.map(str::trim) else {
        return Err(AppError::UnsupportedChain("NaN".to_string()));
    };

    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        let id = u64::from_str_radix(hex, 16)
            .map_err(|_| AppError::UnsupportedChain("NaN".to_string()))?;
        return ChainId::try_from(id).map_err(|_| AppError::UnsupportedChain(id.to_string()));
    }

    let number = parse_js_decimal(raw);
    if number.is_nan() {
        return Err(AppError::UnsupportedChain("NaN".to_string()));
    }
    if number.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&number) {
        if let Ok(chain_id) = ChainId::try_from(number as u64) {
            return Ok(chain_id);
        }
    }
    Err(AppError::UnsupportedChain(format_js_number(number)))
}

/// Decimal part of `Number()`. Rust's float parser also takes `inf` and `nan`, which JavaScript
/// doesn't, so only `Infinity` is let through as a word.
fn parse_js_decimal(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    match raw.strip_prefix(['+', '-']).unwrap_or(raw) {
        "Infinity" if raw.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        digits if digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
            raw.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

fn format_js_number(number: f64) -> String {
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // `-0` prints as `0` in JavaScript
    if number == 0.0 {
        return "0".to_string();
    }
    number.to_string()
}

/// The upstream gets the inbound body re-serialized, not the raw bytes: what it sees is exactly
/// the JSON we parsed. An empty body stays empty.
fn reserialize(body: &[u8]) -> Result<Bytes, AppError> {
    if body.is_empty() {
        return Ok(Bytes::new());
    }
    let value: serde_json::Value = serde_json::from_slice(body)
        .context("request body is not valid JSON")
        .map_err(AppError::InvalidRequestBody)?;
    let json = serde_json::to_vec(&value)
        .context("failed to serialize request body")
        .map_err(AppError::InvalidRequestBody)?;
    Ok(Bytes::from(json))
}

#[instrument(skip(config, relay, body))]
pub(crate) async fn relay_rpc<T: Transport>(
    config: &RelayConfig,
    relay: &FallbackRelay<T>,
    chain_id: Option<&str>,
    body: &[u8],
) -> Result<RelayedRpc, AppError> {
    let chain_id = parse_chain_id(chain_id)?;
    let payload = reserialize(body)?;

    let urls = config.rpc_urls(chain_id);
    let response = relay.relay(&urls, payload).await.map_err(AppError::Relay)?;

    let body = serde_json::from_slice(&response.body)
        .with_context(|| {
            format!(
                "upstream {} responded {} with a non-JSON body",
                response.upstream, response.status
            )
        })
        .map_err(AppError::InvalidUpstreamBody)?;

    Ok(RelayedRpc {
        status: response.status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_decimal_and_hex() {
        assert_eq!(parse_chain_id(Some("1")).unwrap(), ChainId::Mainnet);
        assert_eq!(parse_chain_id(Some(" 17000 ")).unwrap(), ChainId::Holesky);
        assert_eq!(parse_chain_id(Some("0xaa36a7")).unwrap(), ChainId::Sepolia);
    }

    #[test]
    fn chain_id_accepts_any_numeric_spelling() {
        for raw in ["1.0", "1e0", "+1", "0.1e1", "0x1"] {
            assert_eq!(parse_chain_id(Some(raw)).unwrap(), ChainId::Mainnet, "{raw}");
        }
        assert_eq!(parse_chain_id(Some("1.7e4")).unwrap(), ChainId::Holesky);
    }

    #[test]
    fn chain_id_unsupported() {
        let cases = [
            ("999999", "Chain 999999 is not supported"),
            ("-1", "Chain -1 is not supported"),
            ("1.5", "Chain 1.5 is not supported"),
            ("", "Chain 0 is not supported"),
            ("  ", "Chain 0 is not supported"),
            ("-0", "Chain 0 is not supported"),
            ("Infinity", "Chain Infinity is not supported"),
        ];
        for (raw, message) in cases {
            let err = parse_chain_id(Some(raw)).unwrap_err();
            assert_eq!(err.message(), message, "{raw:?}");
        }
    }

    #[test]
    fn chain_id_not_a_number() {
        for raw in [None, Some("mainnet"), Some("inf"), Some("nan"), Some("1abc"), Some("0xzz")] {
            let err = parse_chain_id(raw).unwrap_err();
            assert_eq!(err.message(), "Chain NaN is not supported", "{raw:?}");
        }
    }

    #[test]
    fn reserialize_compacts_and_keeps_key_order() {
        let body = br#"{ "jsonrpc": "2.0", "method": "eth_chainId", "params": [], "id": 1 }"#;
        let payload = reserialize(body).unwrap();
        assert_eq!(
            &payload[..],
            br#"{"jsonrpc":"2.0","method":"eth_chainId","params":[],"id":1}"#
        );
    }

    #[test]
    fn reserialize_rejects_garbage() {
        let err = reserialize(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidRequestBody(_)));
        assert!(err.message().starts_with("request body is not valid JSON"));
        assert!(reserialize(b"").unwrap().is_empty());
    }
}
