//! Reward issuer seam.

use stakevault_types::{HolderAddress, RewardAmount};

/// Mints or transfers the fungible reward token on the engine's behalf.
///
/// Issuance is assumed infallible given valid inputs; the engine only calls
/// it after every precondition of the enclosing operation has passed.
pub trait RewardIssuer {
    fn issue(&mut self, to: &HolderAddress, amount: RewardAmount);
}
