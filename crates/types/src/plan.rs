use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::{DeployedAddress, PermissionOperation};

/// Everything a caller needs to finish installing the plugin: the deployed
/// instance, its helper contracts, and the permission changes to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedInstallation {
    pub plugin: DeployedAddress,
    /// Auxiliary contracts deployed alongside the plugin. This plugin
    /// variant declares none.
    pub helpers: Vec<Address>,
    pub permissions: Vec<PermissionOperation>,
}

/// The permission changes undoing a previous installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedUninstallation {
    pub permissions: Vec<PermissionOperation>,
}

/// Caller-supplied context for uninstallation: the live plugin instance,
/// the helpers recorded at install time, and the opaque uninstall payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallationPayload {
    pub plugin: DeployedAddress,
    /// Kept for interface symmetry with plugin kinds that do deploy
    /// helpers; this variant never inspects it.
    pub current_helpers: Vec<Address>,
    pub data: Vec<u8>,
}
