use std::path::PathBuf;

use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

use crate::{envy_load, FromEnv};

fn default_confirmations() -> usize {
    1
}

/// Parameters of the deployment itself, as opposed to what is being deployed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Directory with compiled contract artifacts (`<Name>.json`).
    pub artifacts_path: PathBuf,
    /// Salt for deterministic L2 address derivation.
    pub create2_salt: H256,
    /// Confirmations awaited after every sent transaction.
    #[serde(default = "default_confirmations")]
    pub confirmations: usize,
    /// Overrides the aliased governor as the expected L2 deployer.
    pub l2_deployer_addr: Option<Address>,
}

impl FromEnv for DeployConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bridge_deploy", "BRIDGE_DEPLOY_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hash, EnvMutex};

    static MUTEX: EnvMutex = EnvMutex::new();

    #[test]
    fn deploy_config_from_env() {
        let mut lock = MUTEX.lock();
        lock.remove_env(&["BRIDGE_DEPLOY_CONFIRMATIONS", "BRIDGE_DEPLOY_L2_DEPLOYER_ADDR"]);
        lock.set_env(
            r#"
            BRIDGE_DEPLOY_ARTIFACTS_PATH="./artifacts"
            BRIDGE_DEPLOY_CREATE2_SALT="0x0000000000000000000000000000000000000000000000000000000000000001"
        "#,
        );

        let config = DeployConfig::from_env().unwrap();
        assert_eq!(config.artifacts_path, PathBuf::from("./artifacts"));
        assert_eq!(
            config.create2_salt,
            hash("0x0000000000000000000000000000000000000000000000000000000000000001")
        );
        assert_eq!(config.confirmations, 1);
        assert_eq!(config.l2_deployer_addr, None);
    }

    #[test]
    fn explicit_confirmations_override_default() {
        let mut lock = MUTEX.lock();
        lock.set_env(
            r#"
            BRIDGE_DEPLOY_ARTIFACTS_PATH="./artifacts"
            BRIDGE_DEPLOY_CREATE2_SALT="0x0000000000000000000000000000000000000000000000000000000000000001"
            BRIDGE_DEPLOY_CONFIRMATIONS="3"
        "#,
        );

        let config = DeployConfig::from_env().unwrap();
        assert_eq!(config.confirmations, 3);
    }
}
