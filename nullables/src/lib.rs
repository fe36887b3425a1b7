//! Nullable infrastructure for deterministic testing.
//!
//! The external capabilities the signing core consumes (seed entropy and
//! the signing primitive) are abstracted behind traits in `haze-crypto`.
//! This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be configured to fail the way a missing or broken primitive would
//!
//! Usage: swap real implementations for nullables in tests.

pub mod random;
pub mod signer;

pub use random::NullEntropy;
pub use signer::{NullSigner, NullSignerMode};
