use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

/// Direction of a permission change applied against the permission manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Grant,
    Revoke,
}

impl Operation {
    pub fn inverse(self) -> Self {
        match self {
            Operation::Grant => Operation::Revoke,
            Operation::Revoke => Operation::Grant,
        }
    }
}

/// The closed set of permissions this plugin variant wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Lets the plugin execute actions through the DAO.
    Execute,
    /// Lets the DAO reconfigure the plugin's voting settings.
    UpdateVotingSettings,
    /// Lets the DAO manage the plugin's editor list.
    UpdateAddresses,
    /// Lets the holder upgrade the plugin's proxy implementation.
    UpgradePlugin,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::Execute,
        Permission::UpdateVotingSettings,
        Permission::UpdateAddresses,
        Permission::UpgradePlugin,
    ];

    /// The symbolic name the permission id is derived from.
    pub fn name(&self) -> &'static str {
        match self {
            Permission::Execute => "EXECUTE_PERMISSION",
            Permission::UpdateVotingSettings => "UPDATE_VOTING_SETTINGS_PERMISSION",
            Permission::UpdateAddresses => "UPDATE_ADDRESSES_PERMISSION",
            Permission::UpgradePlugin => "UPGRADE_PLUGIN_PERMISSION",
        }
    }
}

/// A single authorization edge change: grant or revoke `permission_id`
/// for `who` on `where`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOperation {
    pub operation: Operation,
    #[serde(rename = "where")]
    pub where_: Address,
    pub who: Address,
    /// Optional condition contract gating the permission. This plugin
    /// variant never attaches one.
    pub condition: Option<Address>,
    pub permission_id: H256,
}

impl PermissionOperation {
    pub fn new(operation: Operation, where_: Address, who: Address, permission_id: H256) -> Self {
        Self {
            operation,
            where_,
            who,
            condition: None,
            permission_id,
        }
    }
}
