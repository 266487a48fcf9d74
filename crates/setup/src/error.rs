use ethers::types::{Address, H256};

/// Failures surfaced by the setup entry points. Planning itself is pure
/// and deterministic, so every failure is a caller input problem; nothing
/// is retried and no partial plan is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The opaque payload did not decode as the expected ABI layout.
    #[error("failed to decode setup payload: {0}")]
    ConfigDecode(#[from] ethers::abi::Error),
    /// The payload decoded but carried the wrong arity or token kinds.
    #[error("malformed setup payload: {0}")]
    MalformedPayload(String),
    /// Reserved for wildcard-actor handling; no current planner path
    /// produces it.
    #[error("unsupported actor: {0:?}")]
    UnsupportedActor(Address),
    /// The deployment mechanism failed to create the plugin instance.
    #[error("plugin deployment failed: {0}")]
    Deployment(String),
}

/// Failures from the permission manager boundary. A failed batch leaves
/// the authorization graph untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("permission {permission_id:?} already granted to {who:?} on {where_:?}")]
    AlreadyGranted {
        where_: Address,
        who: Address,
        permission_id: H256,
    },
    #[error("permission {permission_id:?} not granted to {who:?} on {where_:?}")]
    NotGranted {
        where_: Address,
        who: Address,
        permission_id: H256,
    },
}
