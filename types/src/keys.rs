//! Key material and signature containers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encoding::{bytes_to_hex, hex_to_array};
use crate::error::HazeError;

/// Length of an Ed25519 seed in bytes.
pub const SEED_LEN: usize = 32;

/// Length of an Ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A 32-byte Ed25519 seed (the secret from which the key pair is derived).
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; SEED_LEN]);

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

/// A 64-byte Ed25519 signature.
///
/// Serialized as 128 lowercase hex characters, matching the wire JSON.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(pub [u8; SIGNATURE_LEN]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    pub fn from_hex(text: &str) -> Result<Self, HazeError> {
        hex_to_array("signature", text).map(Self)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = HazeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; SIGNATURE_LEN] =
            bytes.try_into().map_err(|_| HazeError::InvalidLength {
                field: "signature",
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}..)", bytes_to_hex(&self.0[..4]))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SigVisitor;

        impl<'de> serde::de::Visitor<'de> for SigVisitor {
            type Value = Signature;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "128 hex characters")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Signature::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SigVisitor)
    }
}
