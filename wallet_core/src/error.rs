use haze_crypto::CryptoError;
use haze_transactions::TransactionError;
use haze_types::HazeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("signing unavailable: Ed25519 support is not compiled in")]
    SigningUnavailable,

    #[error("malformed signature: expected 64 bytes, got {len}")]
    SignatureMalformed { len: usize },

    #[error("key error: {0}")]
    Key(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<CryptoError> for WalletError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidSeed(reason) => Self::InvalidInput(format!("seed: {reason}")),
            CryptoError::SigningUnavailable => Self::SigningUnavailable,
            CryptoError::SignatureMalformed { len } => Self::SignatureMalformed { len },
            CryptoError::Entropy(reason) => Self::Key(reason),
        }
    }
}

impl From<TransactionError> for WalletError {
    fn from(e: TransactionError) -> Self {
        match e {
            TransactionError::InvalidInput(reason) => Self::InvalidInput(reason),
            TransactionError::InvalidSignature => {
                Self::InvalidInput("signature does not verify against the sender key".into())
            }
            TransactionError::Crypto(inner) => inner.into(),
        }
    }
}

impl From<HazeError> for WalletError {
    fn from(e: HazeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
