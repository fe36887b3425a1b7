//! MistbornAsset transaction: create and evolve dynamic assets.

use std::collections::BTreeMap;

use haze_types::{hex_to_array, Address, AssetAction, ChainScope, DensityLevel};
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// A 32-byte asset identifier.
pub type AssetId = [u8; 32];

/// Metadata key under which the node expects the Merge partner id.
pub const OTHER_ASSET_ID_KEY: &str = "_other_asset_id";

/// Metadata key under which the node expects the Split component list.
pub const COMPONENTS_KEY: &str = "_components";

/// Action-specific fields that are covered by the signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetExtra {
    #[default]
    None,
    /// The asset being merged into this one.
    Merge { other_asset_id: AssetId },
    /// Opaque component description, signed as raw UTF-8.
    Split { components: String },
}

impl AssetExtra {
    /// Read the auxiliary fields for `action` out of asset metadata.
    ///
    /// Only the key relevant to `action` is consulted. A Merge partner id
    /// that is present but not exactly 32 bytes of hex is an error.
    pub fn from_metadata(
        action: AssetAction,
        metadata: &BTreeMap<String, String>,
    ) -> Result<Self, TransactionError> {
        match action {
            AssetAction::Merge => match metadata.get(OTHER_ASSET_ID_KEY) {
                Some(hex) => Ok(Self::Merge {
                    other_asset_id: hex_to_array("other asset id", hex)?,
                }),
                None => Ok(Self::None),
            },
            AssetAction::Split => Ok(metadata
                .get(COMPONENTS_KEY)
                .map(|components| Self::Split {
                    components: components.clone(),
                })
                .unwrap_or_default()),
            _ => Ok(Self::None),
        }
    }
}

/// An unsigned MistbornAsset transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTx {
    pub from: Address,
    pub action: AssetAction,
    pub asset_id: AssetId,
    /// Data owner recorded in the asset.
    pub owner: Address,
    pub density: DensityLevel,
    #[serde(default)]
    pub extra: AssetExtra,
    pub fee: u64,
    pub nonce: u64,
    #[serde(default)]
    pub scope: ChainScope,
}

impl AssetTx {
    /// A Create owned by the sender, with no auxiliary fields.
    pub fn create(
        from: Address,
        asset_id: AssetId,
        density: DensityLevel,
        fee: u64,
        nonce: u64,
        scope: ChainScope,
    ) -> Self {
        Self {
            from,
            action: AssetAction::Create,
            asset_id,
            owner: from,
            density,
            extra: AssetExtra::None,
            fee,
            nonce,
            scope,
        }
    }

    /// Auxiliary bytes contributed to the payload, if the extra matches the action.
    pub fn extra_bytes(&self) -> &[u8] {
        match (&self.action, &self.extra) {
            (AssetAction::Merge, AssetExtra::Merge { other_asset_id }) => other_asset_id.as_slice(),
            (AssetAction::Split, AssetExtra::Split { components }) => components.as_bytes(),
            _ => &[],
        }
    }
}
