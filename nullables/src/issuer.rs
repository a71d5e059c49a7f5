//! Nullable reward issuer — records issuance instead of minting.

use stakevault_staking::RewardIssuer;
use stakevault_types::{HolderAddress, RewardAmount};
use std::collections::HashMap;

/// Deterministic in-memory reward issuer.
///
/// Tracks per-holder issued balances and the running total so tests can
/// assert exactly what the engine paid out.
#[derive(Clone, Debug, Default)]
pub struct NullIssuer {
    balances: HashMap<HolderAddress, RewardAmount>,
    total_issued: RewardAmount,
}

impl NullIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total reward issued to `holder` so far.
    pub fn balance_of(&self, holder: &HolderAddress) -> RewardAmount {
        self.balances
            .get(holder)
            .copied()
            .unwrap_or(RewardAmount::ZERO)
    }

    /// Total reward issued across all holders.
    pub fn total_issued(&self) -> RewardAmount {
        self.total_issued
    }
}

impl RewardIssuer for NullIssuer {
    fn issue(&mut self, to: &HolderAddress, amount: RewardAmount) {
        let balance = self.balances.entry(to.clone()).or_insert(RewardAmount::ZERO);
        *balance = balance.saturating_add(amount);
        self.total_issued = self.total_issued.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuance_accumulates_per_holder() {
        let mut issuer = NullIssuer::new();
        let alice = HolderAddress::new("alice");
        let bob = HolderAddress::new("bob");

        issuer.issue(&alice, RewardAmount::new(100));
        issuer.issue(&alice, RewardAmount::new(50));
        issuer.issue(&bob, RewardAmount::new(7));

        assert_eq!(issuer.balance_of(&alice), RewardAmount::new(150));
        assert_eq!(issuer.balance_of(&bob), RewardAmount::new(7));
        assert_eq!(issuer.total_issued(), RewardAmount::new(157));
    }

    #[test]
    fn unknown_holder_has_zero_balance() {
        let issuer = NullIssuer::new();
        assert_eq!(
            issuer.balance_of(&HolderAddress::new("nobody")),
            RewardAmount::ZERO
        );
    }
}
