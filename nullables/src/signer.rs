//! Nullable signer: a signing primitive that is missing or broken.

use haze_crypto::{signature_from_raw, CryptoError, Signer};
use haze_types::{Address, Signature};

/// How a [`NullSigner`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NullSignerMode {
    /// Behaves as if the Ed25519 primitive were not linked.
    Unavailable,
    /// Produces a raw buffer of the given length instead of 64 bytes.
    Malformed(usize),
}

/// A signer that never produces a valid signature.
///
/// Lets builder tests exercise the unavailable and malformed paths without
/// rebuilding with the `ed25519` feature turned off.
pub struct NullSigner {
    public: Address,
    mode: NullSignerMode,
}

impl NullSigner {
    pub fn unavailable(public: Address) -> Self {
        Self {
            public,
            mode: NullSignerMode::Unavailable,
        }
    }

    pub fn malformed(public: Address, len: usize) -> Self {
        Self {
            public,
            mode: NullSignerMode::Malformed(len),
        }
    }

    pub fn mode(&self) -> NullSignerMode {
        self.mode
    }
}

impl Signer for NullSigner {
    fn public_key(&self) -> &Address {
        &self.public
    }

    fn sign(&self, _message: &[u8]) -> Result<Signature, CryptoError> {
        match self.mode {
            NullSignerMode::Unavailable => Err(CryptoError::SigningUnavailable),
            NullSignerMode::Malformed(len) => signature_from_raw(&vec![0u8; len]),
        }
    }
}
