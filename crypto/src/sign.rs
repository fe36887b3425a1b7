//! Ed25519 message signing and verification.
//!
//! Signing capability is a two-state outcome: either a real 64-byte Ed25519
//! signature, or [`CryptoError::SigningUnavailable`]. There is no fallback
//! that fabricates a signature-shaped value.

use haze_types::{Address, PrivateKey, Signature};

use crate::error::CryptoError;

/// Whether the Ed25519 primitive is compiled into this build.
///
/// Fixed for the lifetime of the process.
pub fn is_signing_available() -> bool {
    cfg!(feature = "ed25519")
}

/// Something that can sign canonical payloads on behalf of an account.
///
/// `sign` must not depend on any state beyond the key itself.
pub trait Signer {
    /// The account address the signatures verify against.
    fn public_key(&self) -> &Address;

    /// Sign `message`, or report why no signature can be produced.
    fn sign(&self, message: &[u8]) -> Result<Signature, CryptoError>;
}

/// Convert a raw signature buffer from an external primitive.
///
/// Anything but exactly 64 bytes is [`CryptoError::SignatureMalformed`].
pub fn signature_from_raw(bytes: &[u8]) -> Result<Signature, CryptoError> {
    Signature::try_from(bytes).map_err(|_| CryptoError::SignatureMalformed { len: bytes.len() })
}

#[cfg(feature = "ed25519")]
mod backend {
    use ed25519_dalek::{Signer as _, SigningKey, Verifier, VerifyingKey};

    use super::*;

    pub fn derive_public_key(seed: &PrivateKey) -> Result<Address, CryptoError> {
        let signing_key = SigningKey::from_bytes(seed.as_bytes());
        Ok(Address::new(signing_key.verifying_key().to_bytes()))
    }

    pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
        let signing_key = SigningKey::from_bytes(private_key.as_bytes());
        Ok(Signature(signing_key.sign(message).to_bytes()))
    }

    pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &Address) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(public_key.as_bytes()) else {
            return false;
        };
        let dalek_sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
        verifying_key.verify(message, &dalek_sig).is_ok()
    }
}

#[cfg(not(feature = "ed25519"))]
mod backend {
    use super::*;

    pub fn derive_public_key(_seed: &PrivateKey) -> Result<Address, CryptoError> {
        Err(CryptoError::SigningUnavailable)
    }

    pub fn sign_message(_message: &[u8], _private_key: &PrivateKey) -> Result<Signature, CryptoError> {
        Err(CryptoError::SigningUnavailable)
    }

    pub fn verify_signature(_message: &[u8], _signature: &Signature, _public_key: &Address) -> bool {
        false
    }
}

/// Derive the Ed25519 public key (the address) from a seed.
pub fn derive_public_key(seed: &PrivateKey) -> Result<Address, CryptoError> {
    backend::derive_public_key(seed)
}

/// Sign a message with a seed, returning the 64-byte signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
    backend::sign_message(message, private_key)
}

/// Verify a signature against a message and public key.
///
/// Returns `false` for a bad signature, an invalid public key, or when the
/// primitive is not compiled in.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &Address) -> bool {
    backend::verify_signature(message, signature, public_key)
}


#[cfg(all(test, not(feature = "ed25519")))]
mod unavailable_tests {
    use super::*;

    #[test]
    fn signing_reports_unavailable() {
        assert!(!is_signing_available());
        let seed = PrivateKey([0u8; 32]);
        assert_eq!(sign_message(b"msg", &seed), Err(CryptoError::SigningUnavailable));
        assert_eq!(derive_public_key(&seed), Err(CryptoError::SigningUnavailable));
        assert!(!verify_signature(b"msg", &Signature([0u8; 64]), &Address::new([0u8; 32])));
    }
}
