use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "rpc-relay-proxy", about = "JSON-RPC relay with provider fallback")]
pub struct Cli {
    /// Bind address (e.g., 0.0.0.0:8080)
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    #[arg(long, env = "INFURA_API_KEY", hide_env_values = true)]
    pub infura_api_key: Option<String>,

    #[arg(long, env = "ALCHEMY_API_KEY", hide_env_values = true)]
    pub alchemy_api_key: Option<String>,

    /// YAML map of `chain_id: url`, tried before the standard providers
    #[arg(long, env = "PROVIDER_URLS_CONFIG")]
    pub provider_urls: Option<PathBuf>,

    /// Timeout of a single upstream attempt (ms)
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", default_value_t = 10_000u64)]
    pub upstream_timeout_ms: u64,
}
