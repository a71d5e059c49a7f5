//! Nullable collateral registry — an in-memory ownership map.

use stakevault_staking::{CollateralRegistry, StakeError};
use stakevault_types::{HolderAddress, ItemId};
use std::collections::HashMap;

/// Deterministic in-memory collateral registry.
///
/// Mints sequential item ids starting at 1 and enforces owner-checked
/// transfers, mimicking the NFT collection the engine is deployed against.
#[derive(Clone, Debug, Default)]
pub struct NullRegistry {
    owners: HashMap<ItemId, HolderAddress>,
    next_id: u64,
}

impl NullRegistry {
    pub fn new() -> Self {
        Self {
            owners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Mint a fresh item to `owner` and return its id.
    pub fn mint(&mut self, owner: &HolderAddress) -> ItemId {
        self.next_id += 1;
        let id = ItemId::new(self.next_id);
        self.owners.insert(id, owner.clone());
        id
    }

    /// Mint `count` fresh items to `owner`.
    pub fn mint_many(&mut self, owner: &HolderAddress, count: usize) -> Vec<ItemId> {
        (0..count).map(|_| self.mint(owner)).collect()
    }

    /// Total number of items ever minted.
    pub fn item_count(&self) -> usize {
        self.owners.len()
    }
}

impl CollateralRegistry for NullRegistry {
    fn owner_of(&self, item: ItemId) -> Option<&HolderAddress> {
        self.owners.get(&item)
    }

    fn transfer(
        &mut self,
        item: ItemId,
        from: &HolderAddress,
        to: &HolderAddress,
    ) -> Result<(), StakeError> {
        match self.owners.get_mut(&item) {
            Some(owner) if owner == from => {
                *owner = to.clone();
                Ok(())
            }
            _ => Err(StakeError::NotOwner(item)),
        }
    }
}
