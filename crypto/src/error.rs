use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("signing unavailable: Ed25519 support is not compiled in")]
    SigningUnavailable,

    #[error("malformed signature: expected 64 bytes, got {len}")]
    SignatureMalformed { len: usize },

    #[error("entropy source failed: {0}")]
    Entropy(String),
}
