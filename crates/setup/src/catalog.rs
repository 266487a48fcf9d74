use ethers::types::{Address, H256};
use ethers::utils::keccak256;

use dao_setup_types::Permission;

/// Wildcard actor reserved by the permission vocabulary. The planner never
/// emits it; it exists so callers can recognize it on inputs.
pub fn any_actor() -> Address {
    Address::repeat_byte(0xff)
}

/// Resolves symbolic permissions to their stable on-chain identifiers.
///
/// Ids are fixed at construction and never change at runtime: each is the
/// keccak-256 hash of the permission's symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    ids: [H256; Permission::ALL.len()],
}

impl PermissionCatalog {
    pub fn new() -> Self {
        Self {
            ids: Permission::ALL.map(|p| H256(keccak256(p.name().as_bytes()))),
        }
    }

    pub fn id(&self, permission: Permission) -> H256 {
        self.ids[permission as usize]
    }
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
