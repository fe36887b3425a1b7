//! Seed entropy.

use haze_types::SEED_LEN;

use crate::error::CryptoError;

/// Source of the 32 random bytes a new key pair is derived from.
///
/// Production code must use a cryptographically secure source; a seed that
/// can be guessed is a key that can be stolen.
pub trait EntropySource {
    fn fill_seed(&self, seed: &mut [u8; SEED_LEN]) -> Result<(), CryptoError>;
}

/// The operating system CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_seed(&self, seed: &mut [u8; SEED_LEN]) -> Result<(), CryptoError> {
        getrandom::getrandom(seed).map_err(|e| CryptoError::Entropy(e.to_string()))
    }
}
