use bridgectl_common::logger;
use bridgectl_config::{
    traits::SaveConfigWithBasePath, DeployConfig, FromEnv, L2AddressesOutput, WalletsConfig,
};
use bridgectl_types::{apply_l1_to_l2_alias, compute_create2_address, hash_bytecode};
use ethers::abi::Token;
use xshell::Shell;

use crate::{
    artifacts::{ContractArtifact, L2_BRIDGE_IMPL_ARTIFACT, PROXY_ARTIFACT},
    messages::{MSG_DEPLOY_OUTPUT, MSG_L2_ADDRESSES_DERIVED},
};

pub fn run(shell: &Shell) -> anyhow::Result<()> {
    let deploy = DeployConfig::from_env()?;
    let wallets = WalletsConfig::from_env()?;

    let governor = wallets.governor()?;
    let l2_governor_addr = apply_l1_to_l2_alias(governor.address);
    let l2_deployer_addr = deploy
        .l2_deployer_addr
        .unwrap_or_else(|| apply_l1_to_l2_alias(governor.address));

    let impl_artifact =
        ContractArtifact::load(shell, &deploy.artifacts_path, L2_BRIDGE_IMPL_ARTIFACT)?;
    let proxy_artifact = ContractArtifact::load(shell, &deploy.artifacts_path, PROXY_ARTIFACT)?;
    let impl_bytecode_hash = hash_bytecode(&impl_artifact.bytecode())?;
    let proxy_bytecode_hash = hash_bytecode(&proxy_artifact.bytecode())?;

    // The implementation takes no constructor arguments; the proxy wires the
    // implementation under the aliased governor as its admin.
    let impl_addr = compute_create2_address(
        l2_deployer_addr,
        impl_bytecode_hash,
        &[],
        deploy.create2_salt,
    );
    let proxy_constructor_input = ethers::abi::encode(&[
        Token::Address(impl_addr),
        Token::Address(l2_governor_addr),
        Token::Bytes(vec![]),
    ]);
    let proxy_addr = compute_create2_address(
        l2_deployer_addr,
        proxy_bytecode_hash,
        &proxy_constructor_input,
        deploy.create2_salt,
    );

    let output = L2AddressesOutput {
        l2_deployer_addr,
        l2_bridge_impl_bytecode_hash: impl_bytecode_hash,
        l2_bridge_proxy_bytecode_hash: proxy_bytecode_hash,
        l2_bridge_impl_addr: impl_addr,
        l2_bridge_proxy_addr: proxy_addr,
    };
    output.save_with_base_path(shell, ".")?;

    logger::note(MSG_DEPLOY_OUTPUT, logger::object_to_string(&output));
    logger::success(MSG_L2_ADDRESSES_DERIVED);
    Ok(())
}
