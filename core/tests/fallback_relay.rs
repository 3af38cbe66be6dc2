use bytes::Bytes;
use reqwest::StatusCode;
use rpc_relay_core::{FallbackRelay, HttpTransport, RelayError};
use serde_json::json;
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A localhost url nobody listens on: connecting is refused right away.
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind an ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/")
}

fn block_number_request() -> serde_json::Value {
    json!({ "jsonrpc": "2.0", "method": "eth_blockNumber", "params": [], "id": 1 })
}

fn relay() -> FallbackRelay {
    FallbackRelay::new(HttpTransport::new(Duration::from_secs(2)))
}

#[tokio::test]
async fn relays_payload_verbatim_as_json_post() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/json"))
        .and(body_json(block_number_request()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": 1, "result": "0x10" })))
        .expect(1)
        .mount(&upstream)
        .await;

    let payload = Bytes::from(serde_json::to_vec(&block_number_request()).unwrap());
    let response = relay().relay(&[upstream.uri()], payload).await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["result"], "0x10");
}

#[tokio::test]
async fn upstream_error_status_is_relayed_without_fallback() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "internal" })))
        .expect(1)
        .mount(&first)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&second)
        .await;

    let response = relay()
        .relay(&[first.uri(), second.uri()], Bytes::from_static(b"{}"))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, Bytes::from_static(br#"{"error":"internal"}"#));
}

#[tokio::test]
async fn refused_connection_falls_back_to_next_upstream() {
    let second = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "0x2" })))
        .expect(1)
        .mount(&second)
        .await;

    let response = relay()
        .relay(&[unreachable_url(), second.uri()], Bytes::from_static(b"{}"))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Bytes::from_static(br#"{"result":"0x2"}"#));
}

#[tokio::test]
async fn slow_upstream_times_out_and_falls_back() {
    let slow = MockServer::start().await;
    let fast = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&slow)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "fast" })))
        .expect(1)
        .mount(&fast)
        .await;

    let relay = FallbackRelay::new(HttpTransport::new(Duration::from_millis(200)));
    let response = relay
        .relay(&[slow.uri(), fast.uri()], Bytes::from_static(b"{}"))
        .await
        .unwrap();

    assert_eq!(response.body, Bytes::from_static(br#"{"result":"fast"}"#));
}

#[tokio::test]
async fn every_upstream_unreachable() {
    let urls = vec![unreachable_url(), unreachable_url()];

    let err = relay()
        .relay(&urls, Bytes::from_static(b"{}"))
        .await
        .unwrap_err();

    let RelayError::AllUpstreamsFailed { attempts, last } = &err;
    assert_eq!(*attempts, 2);
    assert!(last.as_ref().is_some_and(|e| !e.is_timeout()));
    assert!(err.to_string().contains("transport error for 127.0.0.1"), "{err}");
}
