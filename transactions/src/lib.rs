//! HAZE transaction kinds and their canonical signing payload.
//!
//! Transaction kinds:
//! - **Transfer**: move HAZE from the signer to another account
//! - **MistbornAsset**: create or evolve a Mistborn asset (Create, Update,
//!   Condense, Evaporate, Merge, Split)
//!
//! [`payload`] turns either kind into the exact bytes the node verifies the
//! signature against; [`verification`] performs that same check locally.

pub mod asset;
pub mod error;
pub mod payload;
pub mod transfer;
pub mod verification;

pub use asset::{AssetExtra, AssetId, AssetTx, COMPONENTS_KEY, OTHER_ASSET_ID_KEY};
pub use error::TransactionError;
pub use payload::{asset_payload, transfer_payload};
pub use transfer::TransferTx;
pub use verification::verify_transaction;

use haze_types::{Address, ChainScope};
use serde::{Deserialize, Serialize};

/// The unified transaction enum wrapping all HAZE transaction kinds this
/// crate can sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    Transfer(TransferTx),
    MistbornAsset(AssetTx),
}

impl Transaction {
    /// Wire tag, also the payload domain tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "Transfer",
            Self::MistbornAsset(_) => "MistbornAsset",
        }
    }

    /// Get the sender/signer of this transaction.
    pub fn sender(&self) -> &Address {
        match self {
            Self::Transfer(tx) => &tx.from,
            Self::MistbornAsset(tx) => &tx.from,
        }
    }

    pub fn fee(&self) -> u64 {
        match self {
            Self::Transfer(tx) => tx.fee,
            Self::MistbornAsset(tx) => tx.fee,
        }
    }

    pub fn nonce(&self) -> u64 {
        match self {
            Self::Transfer(tx) => tx.nonce,
            Self::MistbornAsset(tx) => tx.nonce,
        }
    }

    pub fn scope(&self) -> &ChainScope {
        match self {
            Self::Transfer(tx) => &tx.scope,
            Self::MistbornAsset(tx) => &tx.scope,
        }
    }

    /// The canonical bytes a signature over this transaction must cover.
    pub fn signing_payload(&self) -> Vec<u8> {
        match self {
            Self::Transfer(tx) => transfer_payload(tx),
            Self::MistbornAsset(tx) => asset_payload(tx),
        }
    }
}
