use std::sync::Arc;

use anyhow::Context;
use bridgectl_common::{ethereum::create_ethers_client, logger, spinner::Spinner};
use bridgectl_config::{
    BridgeContractsConfig, DeployConfig, FromEnv, L1ClientConfig, RolesConfig, WalletsConfig,
};
use bridgectl_types::BridgeRole;
use clap::Subcommand;
use ethers::types::Address;
use xshell::Shell;

use crate::{
    abi::BridgeAbi,
    messages::{
        msg_missing_role_grants, msg_role_already_granted, msg_role_granted,
        MSG_GOVERNOR_KEY_MISSING_ERR, MSG_GRANTING_ROLES_SPINNER, MSG_NO_ROLE_GRANTEES,
        MSG_ROLES_GRANTED, MSG_ROLES_VERIFIED,
    },
};

#[derive(Subcommand, Debug)]
pub enum RolesCommands {
    /// Grant the configured enabler and disabler roles on the L1 bridge
    Grant,
    /// Check that every configured role grant is in place
    Verify,
}

pub async fn run(_shell: &Shell, args: RolesCommands) -> anyhow::Result<()> {
    match args {
        RolesCommands::Grant => grant().await,
        RolesCommands::Verify => verify().await,
    }
}

async fn grant() -> anyhow::Result<()> {
    let roles = RolesConfig::from_env()?;
    if roles.is_empty() {
        logger::info(MSG_NO_ROLE_GRANTEES);
        return Ok(());
    }

    let l1_client = L1ClientConfig::from_env()?;
    let contracts = BridgeContractsConfig::from_env()?;
    let deploy = DeployConfig::from_env()?;
    let wallets = WalletsConfig::from_env()?;

    let governor = wallets.governor()?;
    let client = Arc::new(create_ethers_client(
        governor.private_key.context(MSG_GOVERNOR_KEY_MISSING_ERR)?,
        l1_client.web3_url,
        Some(l1_client.chain_id),
    )?);
    let bridge = BridgeAbi::new(contracts.l1_bridge_proxy()?, client);

    let spinner = Spinner::new(MSG_GRANTING_ROLES_SPINNER);
    for role in BridgeRole::managed() {
        for grantee in roles.grantees(role) {
            if bridge.has_role(role.id().0, *grantee).call().await? {
                logger::info(msg_role_already_granted(role, *grantee));
                continue;
            }
            bridge
                .grant_role(role.id().0, *grantee)
                .send()
                .await?
                .confirmations(deploy.confirmations)
                .await?;
            logger::info(msg_role_granted(role, *grantee));
        }
    }
    spinner.finish();

    logger::success(MSG_ROLES_GRANTED);
    Ok(())
}

async fn verify() -> anyhow::Result<()> {
    let roles = RolesConfig::from_env()?;
    if roles.is_empty() {
        logger::info(MSG_NO_ROLE_GRANTEES);
        return Ok(());
    }

    let l1_client = L1ClientConfig::from_env()?;
    let contracts = BridgeContractsConfig::from_env()?;
    let wallets = WalletsConfig::from_env()?;

    let governor = wallets.governor()?;
    let client = Arc::new(create_ethers_client(
        governor.private_key.context(MSG_GOVERNOR_KEY_MISSING_ERR)?,
        l1_client.web3_url,
        Some(l1_client.chain_id),
    )?);
    let bridge = BridgeAbi::new(contracts.l1_bridge_proxy()?, client);

    let mut missing: Vec<(BridgeRole, Address)> = Vec::new();
    for role in BridgeRole::managed() {
        for grantee in roles.grantees(role) {
            if !bridge.has_role(role.id().0, *grantee).call().await? {
                missing.push((role, *grantee));
            }
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(msg_missing_role_grants(&missing));
    }

    logger::success(MSG_ROLES_VERIFIED);
    Ok(())
}
