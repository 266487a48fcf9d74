use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::VotingSettings;

/// Decoded installation payload.
///
/// Field order matches the on-wire layout: voting settings, initial
/// editors, optional plugin upgrader. A missing upgrader (the zero address
/// on the wire) is `None` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationParams {
    pub voting_settings: VotingSettings,
    pub initial_editors: Vec<Address>,
    pub plugin_upgrader: Option<Address>,
}

/// Decoded uninstallation payload: the same upgrader field the install
/// payload carried, so revokes mirror the grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallationParams {
    pub plugin_upgrader: Option<Address>,
}
