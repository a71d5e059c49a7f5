//! Reward token amount type.
//!
//! Amounts are fixed-point integers (u128) to avoid floating-point errors.
//! The smallest unit is 1 raw; one whole reward token is [`REWARD_UNIT`] raw.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// One whole reward token expressed in raw units (1e18).
pub const REWARD_UNIT: u128 = 1_000_000_000_000_000_000;

/// A quantity of the reward token, stored as raw units (u128).
///
/// Also used for emission rates (raw units per second) — a rate is just a
/// quantity per unit time, and both live in the same fixed-point scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RewardAmount(u128);

impl RewardAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for RewardAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for RewardAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for RewardAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sub_underflow_is_none() {
        let a = RewardAmount::new(5);
        let b = RewardAmount::new(10);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(RewardAmount::new(5)));
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = RewardAmount::new(5);
        let b = RewardAmount::new(10);
        assert_eq!(a.saturating_sub(b), RewardAmount::ZERO);
    }

    #[test]
    fn checked_add_overflow_is_none() {
        let a = RewardAmount::new(u128::MAX);
        assert_eq!(a.checked_add(RewardAmount::new(1)), None);
    }

    use proptest::prelude::*;

    proptest! {
        /// Checked and saturating arithmetic agree wherever checked succeeds.
        #[test]
        fn checked_and_saturating_agree(a in any::<u128>(), b in any::<u128>()) {
            let (a, b) = (RewardAmount::new(a), RewardAmount::new(b));
            if let Some(sum) = a.checked_add(b) {
                prop_assert_eq!(sum, a.saturating_add(b));
            }
            if let Some(diff) = a.checked_sub(b) {
                prop_assert_eq!(diff, a.saturating_sub(b));
            }
        }
    }
}
