pub mod http_client;
mod metrics;
pub mod relay;

pub use http_client::{DEFAULT_TIMEOUT, HttpError, HttpTransport, Transport, UpstreamResponse};
pub use relay::{FallbackRelay, RelayError, RelayResponse};
