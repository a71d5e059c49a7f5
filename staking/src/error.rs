//! Staking-specific errors.

use stakevault_types::{ItemId, RewardAmount, Timestamp};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StakeError {
    #[error("caller does not own item {0}")]
    NotOwner(ItemId),

    #[error("item {0} is not staked by the caller")]
    NotStaked(ItemId),

    #[error("holder has nothing staked")]
    NothingStaked,

    #[error("not eligible for this much: requested {requested}, accrued {available}")]
    NotEligibleForThisMuch {
        requested: RewardAmount,
        available: RewardAmount,
    },

    #[error("settlement time {now} precedes last settlement {last}")]
    InvalidTime { last: Timestamp, now: Timestamp },

    #[error("arithmetic overflow in reward computation")]
    Overflow,
}
