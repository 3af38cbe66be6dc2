use crate::http_client::{HttpError, HttpTransport, Transport, snip_bytes};
use crate::metrics;
use bytes::Bytes;
use reqwest::StatusCode;
use rpc_relay_primitives::SafeUrl;
use tracing::{debug, instrument, warn};

const NO_UPSTREAMS_MESSAGE: &str = "no upstream URLs to relay to";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    /// Which upstream answered, secret removed.
    pub upstream: SafeUrl,
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// Every upstream failed on the transport level. Carries the last failure, if any upstream
    /// was tried at all.
    #[error("{}", all_failed_message(.last.as_ref()))]
    AllUpstreamsFailed {
        attempts: usize,
        #[source]
        last: Option<HttpError>,
    },
}

fn all_failed_message(last: Option<&HttpError>) -> String {
    last.map_or_else(|| NO_UPSTREAMS_MESSAGE.to_string(), ToString::to_string)
}

/// Sends the same payload to upstreams one at a time, in the given order, and hands back the
/// first response it gets.
///
/// Only transport failures move on to the next upstream. An upstream that answers, with any
/// status, is final: a `500` from the first upstream is relayed as is.
pub struct FallbackRelay<T: Transport = HttpTransport> {
    transport: T,
}

impl<T: Transport> FallbackRelay<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[instrument(skip_all, fields(upstreams = urls.len()))]
    pub async fn relay(&self, urls: &[String], payload: Bytes) -> Result<RelayResponse, RelayError> {
        let _timer = metrics::RELAY_DURATION.start_timer();

        let mut last = None;
        for (attempt, url) in urls.iter().enumerate() {
            let upstream = SafeUrl::new(url);
            match self.transport.post(url, payload.clone()).await {
                Ok(response) => {
                    metrics::UPSTREAM_ATTEMPTS
                        .with_label_values(&[upstream.as_str(), metrics::OUTCOME_OK])
                        .inc();
                    if response.status.is_success() {
                        debug!(%upstream, attempt, status = %response.status, "upstream responded");
                    } else {
                        debug!(
                            %upstream,
                            attempt,
                            status = %response.status,
                            body_snip = %snip_bytes(&response.body),
                            "upstream responded with non-success status, relaying as is"
                        );
                    }
                    return Ok(RelayResponse {
                        upstream,
                        status: response.status,
                        body: response.body,
                    });
                }
                Err(err) => {
                    metrics::UPSTREAM_ATTEMPTS
                        .with_label_values(&[upstream.as_str(), metrics::OUTCOME_TRANSPORT_ERROR])
                        .inc();
                    warn!(%upstream, attempt, timeout = err.is_timeout(), "upstream failed: {err}");
                    last = Some(err);
                }
            }
        }

        metrics::RELAY_EXHAUSTED.inc();
        Err(RelayError::AllUpstreamsFailed {
            attempts: urls.len(),
            last,
        })
    }
}
