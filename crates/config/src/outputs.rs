use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

use crate::traits::{FileConfigTrait, FileConfigWithDefaultName};

/// Record written after the L1 bridge deployment sequence completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployL1BridgeOutput {
    pub l1_bridge_impl_addr: Address,
    pub l1_bridge_proxy_addr: Address,
    pub l1_proxy_admin_addr: Address,
    pub bridge_admin_addr: Address,
}

impl FileConfigTrait for DeployL1BridgeOutput {}

impl FileConfigWithDefaultName for DeployL1BridgeOutput {
    const FILE_NAME: &'static str = "l1-bridge-out.yaml";
}

/// Record of the deterministically derived L2 addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct L2AddressesOutput {
    pub l2_deployer_addr: Address,
    pub l2_bridge_impl_bytecode_hash: H256,
    pub l2_bridge_proxy_bytecode_hash: H256,
    pub l2_bridge_impl_addr: Address,
    pub l2_bridge_proxy_addr: Address,
}

impl FileConfigTrait for L2AddressesOutput {}

impl FileConfigWithDefaultName for L2AddressesOutput {
    const FILE_NAME: &'static str = "l2-addresses-out.yaml";
}
