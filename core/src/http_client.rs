use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use rpc_relay_primitives::SafeUrl;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const LOG_SNIP_MAX: usize = 600;

#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    /// Anything that kept us from getting a complete response: DNS, connect, timeout,
    /// a broken HTTP exchange or an interrupted body.
    /// The source is stripped of its URL, provider URLs carry API keys.
    #[error("transport error for {url}: {source}")]
    Transport {
        url: SafeUrl,
        #[source]
        source: reqwest::Error,
    },
}

impl HttpError {
    fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            url: SafeUrl::new(url),
            source: source.without_url(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
        }
    }
}

/// Whatever the upstream answered, error statuses included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

pub(crate) fn snip_bytes(b: &[u8]) -> String {
    let s = String::from_utf8_lossy(b);
    let chars = s.chars().count();
    if chars <= LOG_SNIP_MAX {
        s.into_owned()
    } else {
        let head: String = s.chars().take(LOG_SNIP_MAX / 2).collect();
        let tail: String = s.chars().skip(chars - LOG_SNIP_MAX / 2).collect();
        format!("{head}…{tail}")
    }
}

/// A single POST to a single upstream, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, payload: Bytes) -> Result<UpstreamResponse, HttpError>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self::with_client(Client::new(), timeout)
    }

    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, payload: Bytes) -> Result<UpstreamResponse, HttpError> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HttpError::transport(url, e))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| HttpError::transport(url, e))?;

        Ok(UpstreamResponse { status, body })
    }
}
