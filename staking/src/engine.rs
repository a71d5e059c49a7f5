//! The staking engine — records, operation handlers, read queries.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::accrual;
use crate::collateral::CollateralRegistry;
use crate::error::StakeError;
use crate::events::{ClaimEvent, StakeEvent, UnstakedEvent};
use crate::record::StakeRecord;
use crate::rewards::RewardIssuer;
use stakevault_types::{HolderAddress, ItemId, RewardAmount, StakingParams, Timestamp};

/// The staking engine: one [`StakeRecord`] per holder, plus the two consumed
/// collaborators fixed at construction.
///
/// Operations on different holders touch disjoint records; operations on the
/// same holder must be serialized by the host — the engine performs no
/// internal locking. Every mutating handler works on a copy of the holder's
/// record and commits it only after all checks and side effects succeed, so a
/// failed call leaves ledger, registry, and record untouched.
pub struct StakingEngine<R, I> {
    params: StakingParams,
    registry: R,
    issuer: I,
    /// Identity items are parked under while staked.
    custodian: HolderAddress,
    records: HashMap<HolderAddress, StakeRecord>,
}

impl<R: CollateralRegistry, I: RewardIssuer> StakingEngine<R, I> {
    pub fn new(params: StakingParams, registry: R, issuer: I, custodian: HolderAddress) -> Self {
        Self {
            params,
            registry,
            issuer,
            custodian,
            records: HashMap::new(),
        }
    }

    /// Stake `items` for `holder`, settling accrual first.
    ///
    /// All-or-nothing: every item must currently be owned by `holder`, and an
    /// id repeated within the call fails with [`StakeError::NotOwner`] — its
    /// custody would already have moved by the second transfer. On any
    /// failure no custody moves and the stored record is unchanged.
    pub fn stake(
        &mut self,
        holder: &HolderAddress,
        items: &[ItemId],
        now: Timestamp,
    ) -> Result<StakeEvent, StakeError> {
        let mut record = self.working_record(holder, now);
        accrual::settle(&mut record, &self.params, now)?;

        let mut seen = BTreeSet::new();
        for &item in items {
            if !seen.insert(item) {
                return Err(StakeError::NotOwner(item));
            }
            match self.registry.owner_of(item) {
                Some(owner) if owner == holder => {}
                _ => return Err(StakeError::NotOwner(item)),
            }
        }

        // Transfers cannot fail after the validation pass.
        for &item in items {
            self.registry.transfer(item, holder, &self.custodian)?;
            record.staked_items.insert(item);
        }
        record.emission_rate = accrual::emission_rate(&self.params, record.item_count())?;

        let event = StakeEvent {
            emission_rate: record.emission_rate,
            token_quantity: record.token_quantity,
            token_ids: record.item_ids(),
        };
        debug!(
            holder = %holder,
            staked = items.len(),
            total = record.item_count(),
            rate = record.emission_rate.raw(),
            "stake"
        );
        self.records.insert(holder.clone(), record);
        Ok(event)
    }

    /// Unstake `items`, returning custody to `holder` and paying out the
    /// entire settled balance.
    ///
    /// Paying out in full keeps `token_quantity` always describing time since
    /// the current item configuration began, instead of leaving a balance
    /// accrued under an older rate dangling.
    pub fn unstake(
        &mut self,
        holder: &HolderAddress,
        items: &[ItemId],
        now: Timestamp,
    ) -> Result<UnstakedEvent, StakeError> {
        let mut record = self.staked_record(holder)?;
        accrual::settle(&mut record, &self.params, now)?;

        let mut seen = BTreeSet::new();
        for &item in items {
            if !seen.insert(item) || !record.staked_items.contains(&item) {
                return Err(StakeError::NotStaked(item));
            }
        }

        for &item in items {
            record.staked_items.remove(&item);
            self.registry.transfer(item, &self.custodian, holder)?;
        }
        record.emission_rate = accrual::emission_rate(&self.params, record.item_count())?;

        let payout = record.token_quantity;
        record.token_quantity = RewardAmount::ZERO;
        self.issuer.issue(holder, payout);

        let event = UnstakedEvent {
            emission_rate: record.emission_rate,
            reward_paid: payout,
            token_ids: record.item_ids(),
        };
        debug!(
            holder = %holder,
            unstaked = items.len(),
            remaining = record.item_count(),
            paid = payout.raw(),
            "unstake"
        );
        self.records.insert(holder.clone(), record);
        Ok(event)
    }

    /// Claim `amount` of the settled accrued balance.
    ///
    /// The boundary is inclusive: a claim of exactly the settled
    /// `token_quantity` succeeds, only strictly greater requests fail.
    pub fn claim(
        &mut self,
        holder: &HolderAddress,
        amount: RewardAmount,
        now: Timestamp,
    ) -> Result<ClaimEvent, StakeError> {
        let mut record = self.staked_record(holder)?;
        accrual::settle(&mut record, &self.params, now)?;

        if amount > record.token_quantity {
            return Err(StakeError::NotEligibleForThisMuch {
                requested: amount,
                available: record.token_quantity,
            });
        }
        record.token_quantity = record
            .token_quantity
            .checked_sub(amount)
            .ok_or(StakeError::Overflow)?;
        self.issuer.issue(holder, amount);

        debug!(holder = %holder, amount = amount.raw(), "claim");
        self.records.insert(holder.clone(), record);
        Ok(ClaimEvent { amount })
    }

    /// Claim the entire settled accrued balance.
    pub fn claim_all(
        &mut self,
        holder: &HolderAddress,
        now: Timestamp,
    ) -> Result<ClaimEvent, StakeError> {
        let mut record = self.staked_record(holder)?;
        accrual::settle(&mut record, &self.params, now)?;

        let payout = record.token_quantity;
        record.token_quantity = RewardAmount::ZERO;
        self.issuer.issue(holder, payout);

        debug!(holder = %holder, amount = payout.raw(), "claim_all");
        self.records.insert(holder.clone(), record);
        Ok(ClaimEvent { amount: payout })
    }

    /// The holder's record settled as of `now` — a pure projection, stored
    /// state is not mutated. A holder with no record projects as zero-valued.
    pub fn stake_of(
        &self,
        holder: &HolderAddress,
        now: Timestamp,
    ) -> Result<StakeRecord, StakeError> {
        let mut record = self.working_record(holder, now);
        accrual::settle(&mut record, &self.params, now)?;
        Ok(record)
    }

    /// The configured per-item daily emission (raw units per item per day).
    pub fn emission_per_day(&self) -> RewardAmount {
        RewardAmount::new(self.params.per_item_daily_rate)
    }

    /// Identity of the reward issuer fixed at construction.
    pub fn reward_issuer(&self) -> &I {
        &self.issuer
    }

    /// Identity of the collateral registry fixed at construction.
    pub fn collateral_registry(&self) -> &R {
        &self.registry
    }

    /// The custody identity staked items are held under.
    pub fn custodian(&self) -> &HolderAddress {
        &self.custodian
    }

    /// Working copy of the holder's record, zero-valued if none exists yet.
    fn working_record(&self, holder: &HolderAddress, now: Timestamp) -> StakeRecord {
        self.records
            .get(holder)
            .cloned()
            .unwrap_or_else(|| StakeRecord::new(now))
    }

    /// Working copy for operations that require a non-empty stake set.
    fn staked_record(&self, holder: &HolderAddress) -> Result<StakeRecord, StakeError> {
        match self.records.get(holder) {
            Some(record) if !record.is_empty() => Ok(record.clone()),
            _ => Err(StakeError::NothingStaked),
        }
    }
}
