use std::sync::Arc;

use anyhow::Context;
use bridgectl_common::{ethereum::create_ethers_client, logger, spinner::Spinner};
use bridgectl_config::{
    BridgeContractsConfig, DeployConfig, FromEnv, L1ClientConfig, L2ClientConfig, WalletsConfig,
};
use clap::Subcommand;
use ethers::{
    providers::{Http, Provider},
    types::Address,
};
use serde::Serialize;
use xshell::Shell;

use crate::{
    abi::BridgeAbi,
    messages::{
        msg_flow_already_set, msg_flow_toggled, msg_toggling_flow, MSG_BRIDGE_STATUS,
        MSG_GOVERNOR_KEY_MISSING_ERR,
    },
};

const DEPOSITS_FLOW: &str = "Deposits";
const WITHDRAWALS_FLOW: &str = "Withdrawals";

#[derive(Subcommand, Debug)]
pub enum BridgeCommands {
    /// Allow new deposits through the L1 bridge
    EnableDeposits,
    /// Stop accepting new deposits
    DisableDeposits,
    /// Allow withdrawal finalization on the L1 bridge
    EnableWithdrawals,
    /// Stop finalizing withdrawals
    DisableWithdrawals,
    /// Report the current bridge state
    Status,
}

pub async fn run(_shell: &Shell, args: BridgeCommands) -> anyhow::Result<()> {
    match args {
        BridgeCommands::EnableDeposits => toggle_flow(DEPOSITS_FLOW, true).await,
        BridgeCommands::DisableDeposits => toggle_flow(DEPOSITS_FLOW, false).await,
        BridgeCommands::EnableWithdrawals => toggle_flow(WITHDRAWALS_FLOW, true).await,
        BridgeCommands::DisableWithdrawals => toggle_flow(WITHDRAWALS_FLOW, false).await,
        BridgeCommands::Status => status().await,
    }
}

async fn toggle_flow(flow: &str, enable: bool) -> anyhow::Result<()> {
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

    let enabled = match flow {
        DEPOSITS_FLOW => bridge.is_deposits_enabled().call().await?,
        _ => bridge.is_withdrawals_enabled().call().await?,
    };
    if enabled == enable {
        logger::info(msg_flow_already_set(flow, enabled));
        return Ok(());
    }

    let spinner = Spinner::new(&msg_toggling_flow(flow, enable));
    let call = match (flow, enable) {
        (DEPOSITS_FLOW, true) => bridge.enable_deposits(),
        (DEPOSITS_FLOW, false) => bridge.disable_deposits(),
        (_, true) => bridge.enable_withdrawals(),
        (_, false) => bridge.disable_withdrawals(),
    };
    call.send()
        .await?
        .confirmations(deploy.confirmations)
        .await?;
    spinner.finish();

    logger::success(msg_flow_toggled(flow, enable));
    Ok(())
}

#[derive(Debug, Serialize)]
struct BridgeStatus {
    l1_bridge_proxy_addr: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    l2_bridge_proxy_addr: Option<Address>,
    l1_initialized: bool,
    l1_deposits_enabled: bool,
    l1_withdrawals_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    l2_deposits_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    l2_withdrawals_enabled: Option<bool>,
}

async fn status() -> anyhow::Result<()> {
    let l1_client = L1ClientConfig::from_env()?;
    let contracts = BridgeContractsConfig::from_env()?;

    let l1_proxy = contracts.l1_bridge_proxy()?;
    let provider = Arc::new(Provider::<Http>::new(Http::new(l1_client.web3_url)));
    let l1_bridge = BridgeAbi::new(l1_proxy, provider);

    let mut status = BridgeStatus {
        l1_bridge_proxy_addr: l1_proxy,
        l2_bridge_proxy_addr: contracts.l2_bridge_proxy_addr,
        l1_initialized: l1_bridge.is_initialized().call().await?,
        l1_deposits_enabled: l1_bridge.is_deposits_enabled().call().await?,
        l1_withdrawals_enabled: l1_bridge.is_withdrawals_enabled().call().await?,
        l2_deposits_enabled: None,
        l2_withdrawals_enabled: None,
    };

    // The L2 side is reported only once the L2 bridge proxy is known.
    if let Ok(l2_proxy) = contracts.l2_bridge_proxy() {
        let l2_client = L2ClientConfig::from_env()?;
        let provider = Arc::new(Provider::<Http>::new(Http::new(l2_client.web3_url)));
        let l2_bridge = BridgeAbi::new(l2_proxy, provider);
        status.l2_deposits_enabled = Some(l2_bridge.is_deposits_enabled().call().await?);
        status.l2_withdrawals_enabled = Some(l2_bridge.is_withdrawals_enabled().call().await?);
    }

    logger::note(MSG_BRIDGE_STATUS, logger::object_to_string(&status));
    Ok(())
}
