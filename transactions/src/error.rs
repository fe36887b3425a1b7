use haze_crypto::CryptoError;
use haze_types::HazeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("signature does not verify against the sender key")]
    InvalidSignature,

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl From<HazeError> for TransactionError {
    fn from(e: HazeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
