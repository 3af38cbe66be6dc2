use crate::providers::{Provider, SlugFromChainId};
use rpc_relay_primitives::ChainId;

pub struct InfuraProvider {
    api_key: String,
}

impl InfuraProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl SlugFromChainId for InfuraProvider {
    fn slug(chain_id: ChainId) -> Option<&'static str> {
        match chain_id {
            ChainId::Mainnet => Some("mainnet"),
            ChainId::Ropsten => Some("ropsten"),
            ChainId::Rinkeby => Some("rinkeby"),
            ChainId::Goerli => Some("goerli"),
            ChainId::Kovan => Some("kovan"),
            ChainId::Holesky => Some("holesky"),
            ChainId::Sepolia => Some("sepolia"),
        }
    }
}

impl Provider for InfuraProvider {
    fn endpoint(&self, chain_id: ChainId) -> Option<String> {
        Self::slug(chain_id).map(|slug| format!("https://{slug}.infura.io/v3/{}", self.api_key))
    }
}
