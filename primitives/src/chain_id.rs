#![allow(clippy::unreadable_literal)]
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum_macros::EnumIter;

/// Networks the relay is willing to forward requests for.
/// Anything outside of this set is rejected before any upstream is contacted.
#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    Mainnet = 1,
    Ropsten = 3,
    Rinkeby = 4,
    Goerli = 5,
    Kovan = 42,
    Holesky = 17000,
    Sepolia = 11155111,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedChainId(pub u64);

impl Display for UnsupportedChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chain {} is not supported", self.0)
    }
}

impl std::error::Error for UnsupportedChainId {}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", <u64>::from(*self))
    }
}

impl From<ChainId> for u64 {
    fn from(c: ChainId) -> Self {
        c as u64
    }
}

impl TryFrom<u64> for ChainId {
    type Error = UnsupportedChainId;
    fn try_from(v: u64) -> Result<Self, Self::Error> {
        use ChainId::{Goerli, Holesky, Kovan, Mainnet, Rinkeby, Ropsten, Sepolia};
        Ok(match v {
            1 => Mainnet,
            3 => Ropsten,
            4 => Rinkeby,
            5 => Goerli,
            42 => Kovan,
            17000 => Holesky,
            11155111 => Sepolia,
            _ => return Err(UnsupportedChainId(v)),
        })
    }
}
