//! Staking parameters fixed at engine construction.

use crate::amount::REWARD_UNIT;
use serde::{Deserialize, Serialize};

/// Seconds in one emission day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Deployment-time configuration of the staking engine.
///
/// Set once at construction and immutable thereafter, mirroring constructor
/// arguments of the on-ledger deployment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StakingParams {
    /// Reward units accrued per staked item per day (raw fixed-point).
    pub per_item_daily_rate: u128,
}

impl StakingParams {
    pub fn new(per_item_daily_rate: u128) -> Self {
        Self { per_item_daily_rate }
    }

    /// One whole reward token per item per day.
    pub fn one_token_per_day() -> Self {
        Self::new(REWARD_UNIT)
    }
}
