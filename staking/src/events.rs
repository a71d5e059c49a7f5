//! Event payloads returned from the operation handlers.
//!
//! The payload is the contract for observers; there is no positional log
//! index. Each handler returns its event on success.

use serde::{Deserialize, Serialize};
use stakevault_types::{ItemId, RewardAmount};

/// Emitted after a successful stake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeEvent {
    /// The holder's new per-second emission rate.
    pub emission_rate: RewardAmount,
    /// Accrued, unclaimed balance after settlement.
    pub token_quantity: RewardAmount,
    /// The full set of item ids now staked by the holder, ascending.
    pub token_ids: Vec<ItemId>,
}

/// Emitted after a successful unstake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnstakedEvent {
    /// The holder's new per-second emission rate.
    pub emission_rate: RewardAmount,
    /// The full accrued balance paid out by this unstake.
    pub reward_paid: RewardAmount,
    /// Item ids still staked after the removal, ascending.
    pub token_ids: Vec<ItemId>,
}

/// Emitted after a successful claim or claim-all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEvent {
    /// The quantity issued to the holder.
    pub amount: RewardAmount,
}
