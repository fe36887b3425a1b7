//! Fundamental types for HAZE transaction signing.
//!
//! This crate defines the value types shared by every other crate in the workspace:
//! the hex codec, addresses, key and signature containers, the asset enumerations
//! (density levels, asset actions) and the optional chain-scoping fields.

pub mod address;
pub mod asset;
pub mod chain;
pub mod encoding;
pub mod error;
pub mod keys;

pub use address::Address;
pub use asset::{AssetAction, DensityLevel};
pub use chain::ChainScope;
pub use encoding::{bytes_to_hex, hex_to_array, hex_to_bytes, normalize_hex};
pub use error::HazeError;
pub use keys::{PrivateKey, Signature, SEED_LEN, SIGNATURE_LEN};
