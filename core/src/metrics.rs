use prometheus::{
    Histogram, IntCounter, IntCounterVec, register_histogram, register_int_counter,
    register_int_counter_vec,
};
use std::sync::LazyLock;

pub(crate) const OUTCOME_OK: &str = "ok";
pub(crate) const OUTCOME_TRANSPORT_ERROR: &str = "transport_error";

pub(crate) static UPSTREAM_ATTEMPTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "rpc_relay_upstream_attempts_total",
        "Attempts to reach a single upstream, by upstream domain and outcome",
        &["domain", "outcome"]
    )
    .expect("register rpc_relay_upstream_attempts_total")
});

pub(crate) static RELAY_EXHAUSTED: LazyLock<IntCounter> = LazyLock::new(|| {
    register_int_counter!(
        "rpc_relay_exhausted_total",
        "Relays where every upstream failed on the transport level"
    )
    .expect("register rpc_relay_exhausted_total")
});

pub(crate) static RELAY_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!(
        "rpc_relay_duration_seconds",
        "Histogram of how long a whole relay (all attempts) takes",
        vec![
            // cached / nearby upstreams
            0.01, 0.025, 0.05,
            // the bulk of calls
            0.1, 0.2, 0.3, 0.5,
            // heavy calls like eth_getLogs
            1.0, 2.5,
            // timeouts and fallbacks
            5.0, 10.0, 30.0,
        ]
    )
    .expect("register rpc_relay_duration_seconds")
});
