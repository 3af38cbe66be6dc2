use crate::cli::Cli;
use anyhow::{Context, Result};
use rpc_relay_fetch::{ApiKeys, rpc_urls};
use rpc_relay_primitives::{ChainId, SafeUrl};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, warn};

/// Per-chain private endpoints. They take priority over every standard provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct ProviderUrls(HashMap<ChainId, String>);

impl ProviderUrls {
    pub fn load(path: &Path) -> Result<Self> {
        let config_file = fs::read_to_string(path)
            .with_context(|| format!("failed to read provider urls from {}", path.display()))?;
        Self::parse(&config_file)
    }

    fn parse(config_file: &str) -> Result<Self> {
        serde_yaml::from_str(config_file).context("failed to parse provider urls")
    }

    pub fn get(&self, chain_id: ChainId) -> Option<&String> {
        self.0.get(&chain_id)
    }
}

impl From<HashMap<ChainId, String>> for ProviderUrls {
    fn from(value: HashMap<ChainId, String>) -> Self {
        Self(value)
    }
}

/// Everything a request needs to find its upstreams. Built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub(crate) struct RelayConfig {
    pub api_keys: ApiKeys,
    pub provider_urls: ProviderUrls,
}

impl RelayConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_keys = ApiKeys {
            infura: cli.infura_api_key.clone(),
            alchemy: cli.alchemy_api_key.clone(),
        };

        let provider_urls = match &cli.provider_urls {
            Some(path) => ProviderUrls::load(path)?,
            None => {
                info!("No provider urls config provided");
                ProviderUrls::default()
            }
        };

        Ok(Self {
            api_keys,
            provider_urls,
        })
    }

    /// Upstreams for `chain_id`, best first: the custom endpoint, then the standard providers.
    pub fn rpc_urls(&self, chain_id: ChainId) -> Vec<String> {
        let mut urls = rpc_urls(chain_id, &self.api_keys);
        if let Some(custom_provider) = self.provider_urls.get(chain_id) {
            urls.insert(0, custom_provider.clone());
        }
        urls
    }

    pub fn log_summary(&self) {
        self.api_keys.warn_missing();
        for chain_id in ChainId::iter() {
            let upstreams = self
                .rpc_urls(chain_id)
                .iter()
                .map(|url| SafeUrl::new(url).to_string())
                .collect::<Vec<_>>();
            if upstreams.is_empty() {
                warn!(%chain_id, "No upstreams for chain, every request to it will fail");
            } else {
                info!(%chain_id, ?upstreams, "Upstreams for chain");
            }
        }
    }
}
