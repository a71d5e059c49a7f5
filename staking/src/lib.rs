//! Custodial NFT staking with time-proportional reward accrual.
//!
//! Holders deposit collateral items into custody and accrue a fungible
//! reward token, proportional to how many items are staked and for how long:
//! `accrued = per_item_daily_rate × item_count × elapsed_secs / 86400`.
//!
//! There is no background ticker. Accrual is settled lazily at the top of
//! every mutating operation and of the read projection, so a record's
//! `token_quantity` always reflects elapsed time without any scheduler.
//!
//! This crate handles:
//! - Per-holder stake records and the pure settlement arithmetic
//! - The operation handlers: stake, unstake, claim, claim-all
//! - Read-only settled projections for queries between writes

pub mod accrual;
pub mod collateral;
pub mod engine;
pub mod error;
pub mod events;
pub mod record;
pub mod rewards;

pub use collateral::CollateralRegistry;
pub use engine::StakingEngine;
pub use error::StakeError;
pub use events::{ClaimEvent, StakeEvent, UnstakedEvent};
pub use record::StakeRecord;
pub use rewards::RewardIssuer;
