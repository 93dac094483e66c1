use ethers::types::Address;
use bridgectl_types::BridgeRole;

/// Common messages
pub(super) const MSG_SELECTED_CONFIG: &str = "Selected config";
pub(super) const MSG_DEPLOYER_KEY_MISSING_ERR: &str = "Deployer wallet has no private key";
pub(super) const MSG_GOVERNOR_KEY_MISSING_ERR: &str = "Governor wallet has no private key";

/// Deploy related messages
pub(super) const MSG_DEPLOYING_L1_IMPL_SPINNER: &str = "Deploying L1 bridge implementation...";
pub(super) const MSG_DEPLOYING_L1_PROXY_SPINNER: &str = "Deploying L1 bridge proxy...";
pub(super) const MSG_INITIALIZING_BRIDGE_SPINNER: &str = "Initializing the bridge...";
pub(super) const MSG_L1_BRIDGE_DEPLOYED: &str = "L1 bridge deployed and initialized";
pub(super) const MSG_DEPLOY_OUTPUT: &str = "Deployment output";
pub(super) const MSG_BRIDGE_ALREADY_INITIALIZED: &str =
    "Bridge is already initialized, skipping the initialize call";
pub(super) const MSG_L2_ADDRESSES_DERIVED: &str = "Deterministic L2 addresses derived";

/// Roles related messages
pub(super) const MSG_GRANTING_ROLES_SPINNER: &str = "Granting bridge roles...";
pub(super) const MSG_ROLES_GRANTED: &str = "Bridge roles granted";
pub(super) const MSG_NO_ROLE_GRANTEES: &str =
    "No role grantees configured, nothing to do";
pub(super) const MSG_ROLES_VERIFIED: &str = "All configured role grants are in place";

pub(super) fn msg_role_already_granted(role: BridgeRole, account: Address) -> String {
    format!("{role} is already granted to {account:?}, skipping")
}

pub(super) fn msg_role_granted(role: BridgeRole, account: Address) -> String {
    format!("Granted {role} to {account:?}")
}

pub(super) fn msg_missing_role_grants(missing: &[(BridgeRole, Address)]) -> String {
    let lines: Vec<_> = missing
        .iter()
        .map(|(role, account)| format!("  {role} is not granted to {account:?}"))
        .collect();
    format!("Missing role grants:\n{}", lines.join("\n"))
}

/// Flow management related messages
pub(super) fn msg_toggling_flow(flow: &str, enable: bool) -> String {
    let action = if enable { "Enabling" } else { "Disabling" };
    format!("{action} {}...", flow.to_lowercase())
}

pub(super) fn msg_flow_already_set(flow: &str, enabled: bool) -> String {
    let state = if enabled { "enabled" } else { "disabled" };
    format!("{flow} are already {state}, skipping")
}

pub(super) fn msg_flow_toggled(flow: &str, enabled: bool) -> String {
    let state = if enabled { "enabled" } else { "disabled" };
    format!("{flow} {state}")
}

pub(super) const MSG_BRIDGE_STATUS: &str = "Bridge status";
