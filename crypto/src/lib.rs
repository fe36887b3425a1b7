//! Cryptographic primitives for HAZE transaction signing.
//!
//! - **Ed25519** key pairs derived from a 32-byte seed; the public key is the address
//! - Signing behind the [`Signer`] trait, with an explicit unavailable outcome
//! - Seed entropy behind the [`EntropySource`] trait (`getrandom` in production)
//!
//! The Ed25519 primitive is compiled in by the default `ed25519` feature.
//! [`is_signing_available`] reports whether it is.

pub mod entropy;
pub mod error;
pub mod keys;
pub mod sign;

pub use entropy::{EntropySource, OsEntropy};
pub use error::CryptoError;
pub use keys::KeyPair;
pub use sign::{
    derive_public_key, is_signing_available, sign_message, signature_from_raw, verify_signature,
    Signer,
};
