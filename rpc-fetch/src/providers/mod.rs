use rpc_relay_primitives::ChainId;

pub mod alchemy;
pub mod infura;

/// A hosted node provider that can serve JSON-RPC for some of the supported chains.
pub trait Provider: Send + Sync {
    /// Full endpoint URL (API key included) for `chain_id`, or `None` if the provider
    /// doesn't serve that chain.
    fn endpoint(&self, chain_id: ChainId) -> Option<String>;
}

pub trait SlugFromChainId {
    fn slug(chain_id: ChainId) -> Option<&'static str>;
}
