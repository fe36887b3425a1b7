//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for HAZE value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HazeError {
    #[error("invalid hex: {reason}")]
    InvalidHex { reason: String },

    #[error("invalid {field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown density code: {0}")]
    UnknownDensity(u8),

    #[error("unknown asset action code: {0}")]
    UnknownAction(u8),

    #[error("unrecognised name: {0}")]
    InvalidName(String),
}
