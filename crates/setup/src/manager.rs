use std::collections::HashMap;

use ethers::types::{Address, H256};

use dao_setup_types::{Operation, PermissionOperation};

use crate::PermissionError;

/// The collaborator that applies a planned operation list against a DAO's
/// authorization graph. Application is atomic: either every operation in
/// the batch takes effect or none does, so the graph never observes a
/// partially-wired plugin.
pub trait PermissionManager {
    fn apply(&mut self, operations: &[PermissionOperation]) -> Result<(), PermissionError>;
}

type Edge = (Address, Address, H256);

/// Reference permission manager keeping the authorization graph in memory.
///
/// Strict on both directions: re-granting an existing edge and revoking an
/// absent one are batch-level failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPermissionManager {
    granted: HashMap<Edge, Option<Address>>,
}

impl InMemoryPermissionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_granted(&self, where_: Address, who: Address, permission_id: H256) -> bool {
        self.granted.contains_key(&(where_, who, permission_id))
    }

    pub fn granted_count(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl PermissionManager for InMemoryPermissionManager {
    fn apply(&mut self, operations: &[PermissionOperation]) -> Result<(), PermissionError> {
        // Stage the whole batch before committing anything.
        let mut staged = self.granted.clone();
        for op in operations {
            let edge = (op.where_, op.who, op.permission_id);
            match op.operation {
                Operation::Grant => {
                    if staged.insert(edge, op.condition).is_some() {
                        return Err(PermissionError::AlreadyGranted {
                            where_: op.where_,
                            who: op.who,
                            permission_id: op.permission_id,
                        });
                    }
                }
                Operation::Revoke => {
                    if staged.remove(&edge).is_none() {
                        return Err(PermissionError::NotGranted {
                            where_: op.where_,
                            who: op.who,
                            permission_id: op.permission_id,
                        });
                    }
                }
            }
        }
        self.granted = staged;
        Ok(())
    }
}
