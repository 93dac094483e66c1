use std::sync::Arc;

use anyhow::Context;
use bridgectl_common::{
    ethereum::{create_ethers_client, EthersClient},
    logger,
    spinner::Spinner,
};
use bridgectl_config::{
    traits::SaveConfigWithBasePath, BridgeContractsConfig, DeployConfig, DeployL1BridgeOutput,
    FromEnv, L1ClientConfig, WalletsConfig,
};
use ethers::{abi::Token, contract::ContractFactory, types::Address};
use xshell::Shell;

use crate::{
    abi::BridgeAbi,
    artifacts::{ContractArtifact, L1_BRIDGE_IMPL_ARTIFACT, PROXY_ARTIFACT},
    messages::{
        MSG_BRIDGE_ALREADY_INITIALIZED, MSG_DEPLOYER_KEY_MISSING_ERR, MSG_DEPLOY_OUTPUT,
        MSG_DEPLOYING_L1_IMPL_SPINNER, MSG_DEPLOYING_L1_PROXY_SPINNER,
        MSG_INITIALIZING_BRIDGE_SPINNER, MSG_L1_BRIDGE_DEPLOYED, MSG_SELECTED_CONFIG,
    },
};

pub async fn run(shell: &Shell) -> anyhow::Result<()> {
    let l1_client = L1ClientConfig::from_env()?;
    let contracts = BridgeContractsConfig::from_env()?;
    let deploy = DeployConfig::from_env()?;
    let wallets = WalletsConfig::from_env()?;

    logger::note(MSG_SELECTED_CONFIG, logger::object_to_string(&contracts));

    let deployer = wallets.deployer()?;
    let governor = wallets.governor()?;
    let client = Arc::new(create_ethers_client(
        deployer.private_key.context(MSG_DEPLOYER_KEY_MISSING_ERR)?,
        l1_client.web3_url,
        Some(l1_client.chain_id),
    )?);

    let spinner = Spinner::new(MSG_DEPLOYING_L1_IMPL_SPINNER);
    let impl_artifact =
        ContractArtifact::load(shell, &deploy.artifacts_path, L1_BRIDGE_IMPL_ARTIFACT)?;
    let impl_addr = deploy_contract(
        client.clone(),
        &impl_artifact,
        vec![
            Token::Address(contracts.l1_token_addr),
            Token::Address(contracts.l2_token_addr.unwrap_or_default()),
            Token::Address(contracts.l2_bridge_proxy_addr.unwrap_or_default()),
        ],
        deploy.confirmations,
    )
    .await?;
    spinner.finish();

    let spinner = Spinner::new(MSG_DEPLOYING_L1_PROXY_SPINNER);
    let proxy_artifact = ContractArtifact::load(shell, &deploy.artifacts_path, PROXY_ARTIFACT)?;
    let proxy_addr = deploy_contract(
        client.clone(),
        &proxy_artifact,
        vec![
            Token::Address(impl_addr),
            Token::Address(contracts.l1_proxy_admin_addr),
            Token::Bytes(vec![]),
        ],
        deploy.confirmations,
    )
    .await?;
    spinner.finish();

    let bridge = BridgeAbi::new(proxy_addr, client);
    if bridge.is_initialized().call().await? {
        logger::warn(MSG_BRIDGE_ALREADY_INITIALIZED);
    } else {
        let spinner = Spinner::new(MSG_INITIALIZING_BRIDGE_SPINNER);
        bridge
            .initialize(governor.address)
            .send()
            .await?
            .confirmations(deploy.confirmations)
            .await?;
        spinner.finish();
    }

    let output = DeployL1BridgeOutput {
        l1_bridge_impl_addr: impl_addr,
        l1_bridge_proxy_addr: proxy_addr,
        l1_proxy_admin_addr: contracts.l1_proxy_admin_addr,
        bridge_admin_addr: governor.address,
    };
    output.save_with_base_path(shell, ".")?;

    logger::note(MSG_DEPLOY_OUTPUT, logger::object_to_string(&output));
    logger::success(MSG_L1_BRIDGE_DEPLOYED);
    Ok(())
}

async fn deploy_contract(
    client: Arc<EthersClient>,
    artifact: &ContractArtifact,
    constructor_args: Vec<Token>,
    confirmations: usize,
) -> anyhow::Result<Address> {
    let factory = ContractFactory::new(artifact.abi.clone(), artifact.bytecode(), client);
    let contract = factory
        .deploy_tokens(constructor_args)?
        .confirmations(confirmations)
        .send()
        .await?;
    Ok(contract.address())
}
