//! Ed25519 key pairs.

use haze_types::{bytes_to_hex, hex_to_array, normalize_hex, Address, PrivateKey, Signature, SEED_LEN};

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::CryptoError;
use crate::sign::{derive_public_key, sign_message, Signer};

/// An account key pair: a 32-byte seed and the public key derived from it.
///
/// The public key is always the Ed25519 derivation of the seed; there is no
/// way to construct a pair where the two disagree. Immutable once built, so a
/// single pair may sign from several threads at once.
pub struct KeyPair {
    public: Address,
    private: PrivateKey,
}

impl KeyPair {
    /// Generate a new key pair from the operating system CSPRNG.
    pub fn generate() -> Result<Self, CryptoError> {
        Self::generate_with(&OsEntropy)
    }

    /// Generate a new key pair from the given entropy source.
    pub fn generate_with(entropy: &impl EntropySource) -> Result<Self, CryptoError> {
        let mut seed = PrivateKey([0u8; SEED_LEN]);
        entropy.fill_seed(&mut seed.0)?;
        Self::from_seed(seed)
    }

    /// Reconstruct a key pair from its seed.
    pub fn from_seed(seed: PrivateKey) -> Result<Self, CryptoError> {
        let public = derive_public_key(&seed)?;
        Ok(Self {
            public,
            private: seed,
        })
    }

    /// Restore a key pair from a 64-character hex seed.
    ///
    /// Surrounding whitespace and embedded spaces are ignored.
    pub fn from_seed_hex(text: &str) -> Result<Self, CryptoError> {
        let normalized = normalize_hex(text);
        if normalized.len() != SEED_LEN * 2 {
            return Err(CryptoError::InvalidSeed(format!(
                "expected {} hex characters, got {}",
                SEED_LEN * 2,
                normalized.len()
            )));
        }
        let bytes: [u8; SEED_LEN] = hex_to_array("seed", &normalized)
            .map_err(|e| CryptoError::InvalidSeed(e.to_string()))?;
        Self::from_seed(PrivateKey(bytes))
    }

    pub fn address(&self) -> &Address {
        &self.public
    }

    /// The address as 64 lowercase hex characters.
    pub fn address_hex(&self) -> String {
        self.public.to_hex()
    }

    /// The seed as 64 lowercase hex characters, for backup.
    pub fn seed_hex(&self) -> String {
        bytes_to_hex(self.private.as_bytes())
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}

impl Signer for KeyPair {
    fn public_key(&self) -> &Address {
        &self.public
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, CryptoError> {
        sign_message(message, &self.private)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "ed25519"))]
mod tests {
    use super::*;

    struct FixedEntropy([u8; SEED_LEN]);

    impl EntropySource for FixedEntropy {
        fn fill_seed(&self, seed: &mut [u8; SEED_LEN]) -> Result<(), CryptoError> {
            seed.copy_from_slice(&self.0);
            Ok(())
        }
    }

    #[test]
    fn generate_produces_valid_keypair() {
        let kp = KeyPair::generate().unwrap();
        assert_ne!(kp.address().as_bytes(), &[0u8; 32]);
        assert_eq!(kp.address_hex().len(), 64);
    }

    #[test]
    fn generated_keypairs_differ() {
        let kp1 = KeyPair::generate().unwrap();
        let kp2 = KeyPair::generate().unwrap();
        assert_ne!(kp1.address(), kp2.address());
    }

    #[test]
    fn generate_with_uses_entropy_source() {
        let kp = KeyPair::generate_with(&FixedEntropy([42u8; SEED_LEN])).unwrap();
        let restored = KeyPair::from_seed(PrivateKey([42u8; SEED_LEN])).unwrap();
        assert_eq!(kp.address(), restored.address());
    }

    #[test]
    fn from_seed_deterministic() {
        let kp1 = KeyPair::from_seed(PrivateKey([42u8; 32])).unwrap();
        let kp2 = KeyPair::from_seed(PrivateKey([42u8; 32])).unwrap();
        assert_eq!(kp1.address(), kp2.address());
    }

    #[test]
    fn different_seeds_produce_different_keys() {
        let kp1 = KeyPair::from_seed(PrivateKey([1u8; 32])).unwrap();
        let kp2 = KeyPair::from_seed(PrivateKey([2u8; 32])).unwrap();
        assert_ne!(kp1.address(), kp2.address());
    }

    #[test]
    fn from_seed_hex_accepts_exactly_64_chars() {
        assert!(KeyPair::from_seed_hex(&"00".repeat(32)).is_ok());
        assert!(matches!(
            KeyPair::from_seed_hex("ab"),
            Err(CryptoError::InvalidSeed(_))
        ));
        let sixty_three = format!("{}0", "00".repeat(31));
        assert!(matches!(
            KeyPair::from_seed_hex(&sixty_three),
            Err(CryptoError::InvalidSeed(_))
        ));
        assert!(KeyPair::from_seed_hex(&"00".repeat(33)).is_err());
    }

    #[test]
    fn from_seed_hex_rejects_non_hex() {
        assert!(matches!(
            KeyPair::from_seed_hex(&"zz".repeat(32)),
            Err(CryptoError::InvalidSeed(_))
        ));
    }

    #[test]
    fn from_seed_hex_ignores_spaces() {
        let spaced = format!("  {}  ", "0a ".repeat(32));
        let kp = KeyPair::from_seed_hex(&spaced).unwrap();
        assert_eq!(kp.seed_hex(), "0a".repeat(32));
    }

    #[test]
    fn seed_hex_roundtrip() {
        let kp1 = KeyPair::generate().unwrap();
        let kp2 = KeyPair::from_seed_hex(&kp1.seed_hex()).unwrap();
        assert_eq!(kp1.address(), kp2.address());
    }

    #[test]
    fn debug_does_not_leak_seed() {
        let kp = KeyPair::from_seed(PrivateKey([0x5a; 32])).unwrap();
        let rendered = format!("{kp:?}");
        assert!(!rendered.contains(&"5a".repeat(8)));
    }
}
