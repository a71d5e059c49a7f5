//! Fundamental types for the stakevault ledger.
//!
//! This crate defines the types shared across the workspace: holder
//! addresses, item identifiers, reward amounts, timestamps, and the
//! construction-time staking parameters.

pub mod address;
pub mod amount;
pub mod item;
pub mod params;
pub mod time;

pub use address::HolderAddress;
pub use amount::{RewardAmount, REWARD_UNIT};
pub use item::ItemId;
pub use params::{StakingParams, SECONDS_PER_DAY};
pub use time::Timestamp;
