use bridgectl_types::BridgeRole;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::{envy_load, FromEnv};

/// Accounts to be granted each of the managed bridge roles. Lists are
/// comma-separated in the environment and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolesConfig {
    #[serde(default)]
    pub deposits_enablers: Vec<Address>,
    #[serde(default)]
    pub deposits_disablers: Vec<Address>,
    #[serde(default)]
    pub withdrawals_enablers: Vec<Address>,
    #[serde(default)]
    pub withdrawals_disablers: Vec<Address>,
}

impl FromEnv for RolesConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bridge_roles", "BRIDGE_ROLES_")
    }
}

impl RolesConfig {
    pub fn grantees(&self, role: BridgeRole) -> &[Address] {
        match role {
            BridgeRole::DefaultAdmin => &[],
            BridgeRole::DepositsEnabler => &self.deposits_enablers,
            BridgeRole::DepositsDisabler => &self.deposits_disablers,
            BridgeRole::WithdrawalsEnabler => &self.withdrawals_enablers,
            BridgeRole::WithdrawalsDisabler => &self.withdrawals_disablers,
        }
    }

    pub fn is_empty(&self) -> bool {
        BridgeRole::managed().all(|role| self.grantees(role).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{addr, EnvMutex};

    static MUTEX: EnvMutex = EnvMutex::new();

    const ROLE_VARS: &[&str] = &[
        "BRIDGE_ROLES_DEPOSITS_ENABLERS",
        "BRIDGE_ROLES_DEPOSITS_DISABLERS",
        "BRIDGE_ROLES_WITHDRAWALS_ENABLERS",
        "BRIDGE_ROLES_WITHDRAWALS_DISABLERS",
    ];

    #[test]
    fn roles_from_env() {
        let mut lock = MUTEX.lock();
        lock.remove_env(ROLE_VARS);
        lock.set_env(
            r#"
            BRIDGE_ROLES_DEPOSITS_ENABLERS="0x1dfe8ea5e8de74634db78d9f8d41a1c832ab91e8,0xde03a0b5963f75f1c8485b355ff6d30f3093bde7"
            BRIDGE_ROLES_WITHDRAWALS_DISABLERS="0x2c9fc71c164f7332f368da477256e1b049575979"
        "#,
        );

        let config = RolesConfig::from_env().unwrap();
        assert_eq!(
            config.grantees(BridgeRole::DepositsEnabler),
            [
                addr("0x1dfe8ea5e8de74634db78d9f8d41a1c832ab91e8"),
                addr("0xde03a0b5963f75f1c8485b355ff6d30f3093bde7"),
            ]
        );
        assert_eq!(
            config.grantees(BridgeRole::WithdrawalsDisabler),
            [addr("0x2c9fc71c164f7332f368da477256e1b049575979")]
        );
        assert!(config.grantees(BridgeRole::DepositsDisabler).is_empty());
        assert!(config.grantees(BridgeRole::DefaultAdmin).is_empty());
        assert!(!config.is_empty());
    }

    #[test]
    fn absent_lists_default_to_empty() {
        let mut lock = MUTEX.lock();
        lock.remove_env(ROLE_VARS);

        let config = RolesConfig::from_env().unwrap();
        assert!(config.is_empty());
    }
}
