//! Per-holder stake record.

use serde::{Deserialize, Serialize};
use stakevault_types::{ItemId, RewardAmount, Timestamp};
use std::collections::BTreeSet;

/// Staking state for a single holder.
///
/// Created zero-valued on a holder's first stake and never deleted — unstake
/// and claim only drive it back to an empty item set and zero balance. The
/// record is exclusively owned by its holder; no other holder's operations
/// touch it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRecord {
    /// Items currently held in custody on behalf of this holder.
    ///
    /// Ordered so event payloads and projections are deterministic. An item
    /// id appears in at most one holder's set across the whole ledger.
    pub staked_items: BTreeSet<ItemId>,

    /// Raw reward units accrued per second.
    ///
    /// Derived: `per_item_daily_rate × |staked_items| / 86400`, truncated.
    /// Recomputed whenever `staked_items` changes, never set independently.
    pub emission_rate: RewardAmount,

    /// Accrued, unclaimed reward balance (raw fixed-point units).
    pub token_quantity: RewardAmount,

    /// When accrual was last settled for this holder.
    pub last_timestamp: Timestamp,
}

impl StakeRecord {
    /// A fresh zero-valued record whose accrual starts at `at`.
    pub fn new(at: Timestamp) -> Self {
        Self {
            staked_items: BTreeSet::new(),
            emission_rate: RewardAmount::ZERO,
            token_quantity: RewardAmount::ZERO,
            last_timestamp: at,
        }
    }

    pub fn item_count(&self) -> u64 {
        self.staked_items.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.staked_items.is_empty()
    }

    /// The staked item ids in ascending order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.staked_items.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_zero_valued() {
        let r = StakeRecord::new(Timestamp::new(42));
        assert!(r.is_empty());
        assert_eq!(r.item_count(), 0);
        assert_eq!(r.emission_rate, RewardAmount::ZERO);
        assert_eq!(r.token_quantity, RewardAmount::ZERO);
        assert_eq!(r.last_timestamp, Timestamp::new(42));
    }

    #[test]
    fn item_ids_are_sorted() {
        let mut r = StakeRecord::new(Timestamp::EPOCH);
        for id in [7u64, 1, 5] {
            r.staked_items.insert(ItemId::new(id));
        }
        let ids: Vec<u64> = r.item_ids().iter().map(|i| i.raw()).collect();
        assert_eq!(ids, vec![1, 5, 7]);
    }
}
