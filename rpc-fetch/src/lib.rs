pub mod providers;

use crate::providers::Provider;
use crate::providers::alchemy::AlchemyProvider;
use crate::providers::infura::InfuraProvider;
use rpc_relay_primitives::ChainId;
use std::fmt::{Debug, Formatter};
use tracing::warn;

/// API keys of the hosted providers. A provider without a key is not used at all.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    pub infura: Option<String>,
    pub alchemy: Option<String>,
}

impl Debug for ApiKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("ApiKeys")
            .field("infura", &redact(&self.infura))
            .field("alchemy", &redact(&self.alchemy))
            .finish()
    }
}

impl ApiKeys {
    /// Providers in preference order.
    pub fn providers(&self) -> Vec<Box<dyn Provider>> {
        let mut providers = vec![];

        if let Some(alchemy_api_key) = &self.alchemy {
            providers.push(Box::new(AlchemyProvider::new(alchemy_api_key.clone())) as Box<dyn Provider>);
        }

        if let Some(infura_api_key) = &self.infura {
            providers.push(Box::new(InfuraProvider::new(infura_api_key.clone())) as Box<dyn Provider>);
        }

        providers
    }

    /// Startup hint: warns about every provider that is going to be skipped.
    pub fn warn_missing(&self) {
        if self.alchemy.is_none() {
            warn!("No alchemy api key provided");
        }
        if self.infura.is_none() {
            warn!("No infura api key provided");
        }
    }
}

/// Standard provider URLs for `chain_id`, best first.
pub fn rpc_urls(chain_id: ChainId, api_keys: &ApiKeys) -> Vec<String> {
    api_keys
        .providers()
        .iter()
        .filter_map(|provider| provider.endpoint(chain_id))
        .collect()
}
