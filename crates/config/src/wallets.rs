use bridgectl_common::wallets::Wallet;
use ethers::types::H256;
use serde::{Deserialize, Serialize};

use crate::{envy_load, FromEnv};

/// Private keys of the accounts driving the deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletsConfig {
    pub deployer_private_key: H256,
    pub governor_private_key: H256,
}

impl FromEnv for WalletsConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bridge_wallets", "BRIDGE_WALLETS_")
    }
}

impl WalletsConfig {
    pub fn deployer(&self) -> anyhow::Result<Wallet> {
        Wallet::new_with_key(self.deployer_private_key)
    }

    pub fn governor(&self) -> anyhow::Result<Wallet> {
        Wallet::new_with_key(self.governor_private_key)
    }
}
