use clap::Subcommand;
use xshell::Shell;

mod l1_bridge;
mod l2_addresses;

#[derive(Subcommand, Debug)]
pub enum DeployCommands {
    /// Deploy the L1 bridge: implementation, proxy, initialize
    L1Bridge,
    /// Derive the deterministic L2 bridge addresses
    L2Addresses,
}

pub async fn run(shell: &Shell, args: DeployCommands) -> anyhow::Result<()> {
    match args {
        DeployCommands::L1Bridge => l1_bridge::run(shell).await,
        DeployCommands::L2Addresses => l2_addresses::run(shell),
    }
}
