//! Collateral registry seam.
//!
//! The registry is the authoritative ownership map for collateral items. The
//! engine never mints or tracks ownership itself; it only reads owners and
//! moves custody through this trait. Implementations live with the host
//! (the `stakevault-nullables` crate provides a deterministic in-memory one
//! for tests).

use crate::error::StakeError;
use stakevault_types::{HolderAddress, ItemId};

pub trait CollateralRegistry {
    /// Current owner of an item, or `None` if the item does not exist.
    fn owner_of(&self, item: ItemId) -> Option<&HolderAddress>;

    /// Move custody of `item` from `from` to `to`.
    ///
    /// Fails with [`StakeError::NotOwner`] when `from` is not the current
    /// owner; on failure the registry is unchanged.
    fn transfer(
        &mut self,
        item: ItemId,
        from: &HolderAddress,
        to: &HolderAddress,
    ) -> Result<(), StakeError>;
}
