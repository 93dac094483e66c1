use anyhow::Context as _;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::{envy_load, FromEnv};

/// Addresses of the bridge contracts on both layers. Addresses produced by
/// deployment steps stay optional until those steps have run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeContractsConfig {
    pub l1_token_addr: Address,
    pub l1_proxy_admin_addr: Address,
    pub l2_token_addr: Option<Address>,
    pub l1_bridge_impl_addr: Option<Address>,
    pub l1_bridge_proxy_addr: Option<Address>,
    pub l2_bridge_impl_addr: Option<Address>,
    pub l2_bridge_proxy_addr: Option<Address>,
}

impl FromEnv for BridgeContractsConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bridge_contracts", "BRIDGE_CONTRACTS_")
    }
}

impl BridgeContractsConfig {
    pub fn l1_bridge_proxy(&self) -> anyhow::Result<Address> {
        self.l1_bridge_proxy_addr
            .context("L1 bridge proxy address is not set; deploy the L1 bridge first")
    }

    pub fn l2_bridge_proxy(&self) -> anyhow::Result<Address> {
        self.l2_bridge_proxy_addr
            .context("L2 bridge proxy address is not set")
    }
}
