//! Pure settlement arithmetic.
//!
//! All values are deterministic integers: rates and quantities are `u128`
//! raw units, timestamps are `u64` whole seconds, and every multiply is
//! checked. Division truncates toward zero, so a settlement can under-credit
//! by at most one raw unit and never over-credits.

use crate::error::StakeError;
use crate::record::StakeRecord;
use stakevault_types::{RewardAmount, StakingParams, Timestamp, SECONDS_PER_DAY};

/// Reward accrued by `item_count` items between `last` and `now`.
///
/// `per_item_daily_rate × item_count × elapsed_secs / 86400`, computed in one
/// expression so truncation happens exactly once per settlement window.
/// Fails with [`StakeError::InvalidTime`] when `now` precedes `last`.
pub fn accrued(
    params: &StakingParams,
    item_count: u64,
    last: Timestamp,
    now: Timestamp,
) -> Result<RewardAmount, StakeError> {
    if now < last {
        return Err(StakeError::InvalidTime { last, now });
    }
    let elapsed = last.elapsed_since(now);
    let total = params
        .per_item_daily_rate
        .checked_mul(item_count as u128)
        .and_then(|v| v.checked_mul(elapsed as u128))
        .ok_or(StakeError::Overflow)?;
    Ok(RewardAmount::new(total / SECONDS_PER_DAY as u128))
}

/// Per-second emission rate for `item_count` staked items, truncated.
pub fn emission_rate(params: &StakingParams, item_count: u64) -> Result<RewardAmount, StakeError> {
    let per_day = params
        .per_item_daily_rate
        .checked_mul(item_count as u128)
        .ok_or(StakeError::Overflow)?;
    Ok(RewardAmount::new(per_day / SECONDS_PER_DAY as u128))
}

/// Settle accrual on `record` up to `now`.
///
/// Adds the quantity accrued since `record.last_timestamp` and advances the
/// timestamp. Idempotent when `now == record.last_timestamp`. Must run at the
/// top of every mutating operation, before the operation's own effect, so
/// that item-set changes never apply retroactively to already-elapsed time.
pub fn settle(
    record: &mut StakeRecord,
    params: &StakingParams,
    now: Timestamp,
) -> Result<(), StakeError> {
    let earned = accrued(params, record.item_count(), record.last_timestamp, now)?;
    record.token_quantity = record
        .token_quantity
        .checked_add(earned)
        .ok_or(StakeError::Overflow)?;
    record.last_timestamp = now;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakevault_types::REWARD_UNIT;

    fn params(rate: u128) -> StakingParams {
        StakingParams::new(rate)
    }

    #[test]
    fn one_item_one_day_accrues_the_daily_rate() {
        let p = params(REWARD_UNIT);
        let earned = accrued(&p, 1, Timestamp::new(0), Timestamp::new(SECONDS_PER_DAY)).unwrap();
        assert_eq!(earned.raw(), REWARD_UNIT);
    }

    #[test]
    fn accrual_scales_with_item_count() {
        let p = params(REWARD_UNIT);
        let one = accrued(&p, 1, Timestamp::new(0), Timestamp::new(1000)).unwrap();
        let five = accrued(&p, 5, Timestamp::new(0), Timestamp::new(1000)).unwrap();
        assert_eq!(five.raw(), one.raw() * 5);
    }

    #[test]
    fn zero_elapsed_accrues_zero() {
        let p = params(REWARD_UNIT);
        let t = Timestamp::new(12345);
        assert_eq!(accrued(&p, 10, t, t).unwrap(), RewardAmount::ZERO);
    }

    #[test]
    fn zero_items_accrue_zero() {
        let p = params(REWARD_UNIT);
        let earned = accrued(&p, 0, Timestamp::new(0), Timestamp::new(1_000_000)).unwrap();
        assert_eq!(earned, RewardAmount::ZERO);
    }

    #[test]
    fn truncates_toward_zero() {
        // 1 raw/day over 1 second: 1/86400 truncates to 0, never rounds up.
        let p = params(1);
        let earned = accrued(&p, 1, Timestamp::new(0), Timestamp::new(1)).unwrap();
        assert_eq!(earned, RewardAmount::ZERO);
        // A full day minus one second still truncates down.
        let almost = accrued(&p, 1, Timestamp::new(0), Timestamp::new(SECONDS_PER_DAY - 1)).unwrap();
        assert_eq!(almost, RewardAmount::ZERO);
    }

    #[test]
    fn backwards_clock_is_rejected() {
        let p = params(REWARD_UNIT);
        let err = accrued(&p, 1, Timestamp::new(100), Timestamp::new(99)).unwrap_err();
        assert_eq!(
            err,
            StakeError::InvalidTime {
                last: Timestamp::new(100),
                now: Timestamp::new(99),
            }
        );
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let p = params(u128::MAX);
        let err = accrued(&p, 2, Timestamp::new(0), Timestamp::new(1)).unwrap_err();
        assert_eq!(err, StakeError::Overflow);
    }

    #[test]
    fn emission_rate_matches_daily_rate_over_seconds_per_day() {
        let p = params(REWARD_UNIT);
        for n in [0u64, 1, 2, 5, 1000] {
            let rate = emission_rate(&p, n).unwrap();
            assert_eq!(rate.raw(), REWARD_UNIT * n as u128 / SECONDS_PER_DAY as u128);
        }
    }

    #[test]
    fn settle_is_idempotent_at_same_instant() {
        let p = params(REWARD_UNIT);
        let mut record = StakeRecord::new(Timestamp::new(0));
        record.staked_items.insert(stakevault_types::ItemId::new(1));

        settle(&mut record, &p, Timestamp::new(500)).unwrap();
        let after_first = record.token_quantity;
        settle(&mut record, &p, Timestamp::new(500)).unwrap();
        assert_eq!(record.token_quantity, after_first);
        assert_eq!(record.last_timestamp, Timestamp::new(500));
    }

    #[test]
    fn settle_accumulates_across_windows() {
        let p = params(SECONDS_PER_DAY as u128); // 1 raw per item-second
        let mut record = StakeRecord::new(Timestamp::new(0));
        record.staked_items.insert(stakevault_types::ItemId::new(1));

        settle(&mut record, &p, Timestamp::new(10)).unwrap();
        settle(&mut record, &p, Timestamp::new(25)).unwrap();
        assert_eq!(record.token_quantity.raw(), 25);
    }
}
