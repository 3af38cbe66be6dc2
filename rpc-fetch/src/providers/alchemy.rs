use crate::providers::{Provider, SlugFromChainId};
use rpc_relay_primitives::ChainId;

pub struct AlchemyProvider {
    api_key: String,
}

impl AlchemyProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl SlugFromChainId for AlchemyProvider {
    /// Legacy networks still live on `alchemyapi.io`; the newer testnets are only served from
    /// `g.alchemy.com`.
    fn slug(chain_id: ChainId) -> Option<&'static str> {
        use ChainId::{Goerli, Holesky, Kovan, Mainnet, Rinkeby, Ropsten, Sepolia};
        match chain_id {
            Mainnet => Some("eth-mainnet.alchemyapi.io"),
            Ropsten => Some("eth-ropsten.alchemyapi.io"),
            Rinkeby => Some("eth-rinkeby.alchemyapi.io"),
            Goerli => Some("eth-goerli.alchemyapi.io"),
            Kovan => Some("eth-kovan.alchemyapi.io"),
            Holesky => Some("eth-holesky.g.alchemy.com"),
            Sepolia => Some("eth-sepolia.g.alchemy.com"),
        }
    }
}

impl Provider for AlchemyProvider {
    fn endpoint(&self, chain_id: ChainId) -> Option<String> {
        Self::slug(chain_id).map(|host| format!("https://{host}/v2/{}", self.api_key))
    }
}
