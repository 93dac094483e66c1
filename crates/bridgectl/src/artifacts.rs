use std::path::Path;

use anyhow::Context;
use bridgectl_common::files::read_json_file;
use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use xshell::Shell;

pub const L1_BRIDGE_IMPL_ARTIFACT: &str = "L1ERC20Bridge";
pub const L2_BRIDGE_IMPL_ARTIFACT: &str = "L2ERC20Bridge";
pub const PROXY_ARTIFACT: &str = "OssifiableProxy";

/// Compiled contract artifact. The bytecode field comes either as a plain
/// hex string (hardhat) or nested under `object` (forge).
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    pub abi: Abi,
    bytecode: RawBytecode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Plain(Bytes),
    Object { object: Bytes },
}

impl ContractArtifact {
    pub fn load(shell: &Shell, artifacts_path: &Path, name: &str) -> anyhow::Result<Self> {
        let path = artifacts_path.join(format!("{name}.json"));
        read_json_file(shell, &path)
            .with_context(|| format!("Failed to load contract artifact {:?}", path))
    }

    pub fn bytecode(&self) -> Bytes {
        match &self.bytecode {
            RawBytecode::Plain(bytes) => bytes.clone(),
            RawBytecode::Object { object } => object.clone(),
        }
    }
}
