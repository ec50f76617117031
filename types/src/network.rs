//! Network identifiers and well-known constants.

use serde::{Deserialize, Serialize};

/// Type tag of the native coin.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// Public devnet full node.
pub const DEVNET_RPC_URL: &str = "https://fullnode.devnet.sui.io";

/// Public testnet full node.
pub const TESTNET_RPC_URL: &str = "https://fullnode.testnet.sui.io";

/// Identifies which public network a client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Development network, reset frequently.
    #[default]
    Devnet,
    /// Public test network.
    Testnet,
}

impl Network {
    /// Default full node endpoint for this network.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Self::Devnet => DEVNET_RPC_URL,
            Self::Testnet => TESTNET_RPC_URL,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
        }
    }
}
