use std::fmt;

use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Forecast of the address a contract will occupy once deployed.
///
/// A forecast is only valid while the deployer's nonce has not moved; the
/// authoritative address is whatever the deployment mechanism actually
/// returns, as a [`DeployedAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictedAddress(Address);

impl PredictedAddress {
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn address(&self) -> Address {
        self.0
    }

    /// Whether a later-observed deployment landed where this forecast said.
    pub fn matches(&self, deployed: &DeployedAddress) -> bool {
        self.0 == deployed.address()
    }
}

impl fmt::Display for PredictedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Address of a contract instance that actually exists on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployedAddress(Address);

impl DeployedAddress {
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for DeployedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
