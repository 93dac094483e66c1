use serde::{Deserialize, Serialize};
use url::Url;

use crate::{envy_load, FromEnv};

/// Connection parameters for the L1 JSON-RPC endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct L1ClientConfig {
    pub web3_url: Url,
    pub chain_id: u64,
}

impl FromEnv for L1ClientConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bridge_eth_client", "BRIDGE_ETH_CLIENT_")
    }
}

/// Connection parameters for the L2 JSON-RPC endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct L2ClientConfig {
    pub web3_url: Url,
    pub chain_id: u64,
}

impl FromEnv for L2ClientConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bridge_l2_client", "BRIDGE_L2_CLIENT_")
    }
}
