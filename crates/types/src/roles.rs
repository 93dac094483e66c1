use ethers::{types::H256, utils::keccak256};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Access-control roles recognized by the bridge contracts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum BridgeRole {
    #[strum(serialize = "DEFAULT_ADMIN_ROLE")]
    DefaultAdmin,
    #[strum(serialize = "DEPOSITS_ENABLER_ROLE")]
    DepositsEnabler,
    #[strum(serialize = "DEPOSITS_DISABLER_ROLE")]
    DepositsDisabler,
    #[strum(serialize = "WITHDRAWALS_ENABLER_ROLE")]
    WithdrawalsEnabler,
    #[strum(serialize = "WITHDRAWALS_DISABLER_ROLE")]
    WithdrawalsDisabler,
}

impl BridgeRole {
    /// The `bytes32` identifier the contracts use for this role.
    /// The admin role is the zero hash; managed roles hash their name.
    pub fn id(self) -> H256 {
        match self {
            BridgeRole::DefaultAdmin => H256::zero(),
            role => H256(keccak256(role.to_string().as_bytes())),
        }
    }

    /// Roles granted and verified by the deployment flow, admin excluded.
    pub fn managed() -> impl Iterator<Item = BridgeRole> {
        BridgeRole::iter().filter(|role| *role != BridgeRole::DefaultAdmin)
    }
}
