use bridgectl_common::{init_global_config, logger, GlobalConfig};
use clap::{command, Parser, Subcommand};
use xshell::Shell;

use crate::commands::{bridge::BridgeCommands, deploy::DeployCommands, roles::RolesCommands};

mod abi;
mod artifacts;
mod commands;
mod messages;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Bridgectl {
    #[command(subcommand)]
    command: BridgectlSubcommands,
    #[clap(flatten)]
    global: BridgectlGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum BridgectlSubcommands {
    /// Deployment related commands
    #[command(subcommand)]
    Deploy(DeployCommands),
    /// Role granting and verification
    #[command(subcommand)]
    Roles(RolesCommands),
    /// Deposit and withdrawal flow management
    #[command(subcommand)]
    Bridge(BridgeCommands),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct BridgectlGlobalArgs {
    /// Verbose mode
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    logger::new_empty_line();
    logger::intro();

    let shell = Shell::new().unwrap();
    let args = Bridgectl::parse();

    init_global_config(GlobalConfig {
        verbose: args.global.verbose,
    });

    match run_subcommand(args, &shell).await {
        Ok(_) => {}
        Err(e) => {
            logger::error(e.to_string());

            if e.chain().count() > 1 {
                logger::error_note(
                    "Caused by:",
                    &e.chain()
                        .skip(1)
                        .enumerate()
                        .map(|(i, cause)| format!("  {i}: {}", cause))
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
            }

            logger::outro("Failed");
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(args: Bridgectl, shell: &Shell) -> anyhow::Result<()> {
    match args.command {
        BridgectlSubcommands::Deploy(args) => commands::deploy::run(shell, args).await?,
        BridgectlSubcommands::Roles(args) => commands::roles::run(shell, args).await?,
        BridgectlSubcommands::Bridge(args) => commands::bridge::run(shell, args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Bridgectl::command().debug_assert();
    }

    #[test]
    fn flow_commands_parse() {
        for cmd in [
            "enable-deposits",
            "disable-deposits",
            "enable-withdrawals",
            "disable-withdrawals",
            "status",
        ] {
            Bridgectl::try_parse_from(["bridgectl", "bridge", cmd]).unwrap();
        }
        Bridgectl::try_parse_from(["bridgectl", "deploy", "l1-bridge", "--verbose"]).unwrap();
        Bridgectl::try_parse_from(["bridgectl", "roles", "grant"]).unwrap();
    }
}
