//! Holder address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a participant in the ledger: a staking holder, or the
/// custodian the engine parks collateral under while it is staked.
///
/// Addresses are opaque strings assigned by the host execution environment;
/// the engine only compares them for equality and uses them as map keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolderAddress(String);

impl HolderAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for HolderAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for HolderAddress {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
