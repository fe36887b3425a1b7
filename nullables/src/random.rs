//! Nullable entropy: deterministic seeds.

use std::sync::atomic::{AtomicUsize, Ordering};

use haze_crypto::{CryptoError, EntropySource};
use haze_types::SEED_LEN;

/// A deterministic entropy source for testing.
///
/// Returns pre-configured seeds in order, wrapping around.
pub struct NullEntropy {
    seeds: Vec<[u8; SEED_LEN]>,
    index: AtomicUsize,
}

impl NullEntropy {
    /// Create with a sequence of deterministic seeds.
    pub fn new(seeds: Vec<[u8; SEED_LEN]>) -> Self {
        Self {
            seeds,
            index: AtomicUsize::new(0),
        }
    }

    /// Create with a single seed that will be returned for every call.
    pub fn constant(seed: [u8; SEED_LEN]) -> Self {
        Self::new(vec![seed])
    }
}

impl EntropySource for NullEntropy {
    fn fill_seed(&self, seed: &mut [u8; SEED_LEN]) -> Result<(), CryptoError> {
        if self.seeds.is_empty() {
            return Err(CryptoError::Entropy("null entropy has no seeds".into()));
        }
        let idx = self.index.fetch_add(1, Ordering::Relaxed) % self.seeds.len();
        seed.copy_from_slice(&self.seeds[idx]);
        Ok(())
    }
}
