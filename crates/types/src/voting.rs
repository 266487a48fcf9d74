use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// Ratios (support threshold, minimum participation) are expressed in
/// parts per million.
pub const RATIO_BASE: u32 = 1_000_000;

/// Convert a whole percentage into a ratio with [`RATIO_BASE`] precision.
/// The `u8` domain keeps the product well inside `u32` for any input.
pub fn pct_to_ratio(pct: u8) -> u32 {
    u32::from(pct) * (RATIO_BASE / 100)
}

/// How the plugin tallies and finalizes proposals. Opaque to the setup
/// planner beyond being forwarded to the plugin's initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VotingMode {
    Standard = 0,
    EarlyExecution = 1,
    VoteReplacement = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid voting mode: {0}")]
pub struct InvalidVotingMode(pub u8);

impl TryFrom<u8> for VotingMode {
    type Error = InvalidVotingMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VotingMode::Standard),
            1 => Ok(VotingMode::EarlyExecution),
            2 => Ok(VotingMode::VoteReplacement),
            other => Err(InvalidVotingMode(other)),
        }
    }
}

/// Governance parameters forwarded verbatim to the new plugin instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingSettings {
    pub voting_mode: VotingMode,
    pub support_threshold: u32,
    pub min_participation: u32,
    pub min_duration: u64,
    pub min_proposer_voting_power: U256,
}
