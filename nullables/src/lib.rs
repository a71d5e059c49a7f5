//! Nullable infrastructure for deterministic testing.
//!
//! The engine's external dependencies — clock, collateral registry, reward
//! issuer — are abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real collaborators for nullables in tests.

pub mod clock;
pub mod issuer;
pub mod registry;

pub use clock::NullClock;
pub use issuer::NullIssuer;
pub use registry::NullRegistry;
