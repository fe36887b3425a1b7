//! Transaction building helpers.
//!
//! Each builder validates its inputs, encodes the canonical payload, signs
//! it and renders the wire JSON. There is no partial success: either a fully
//! signed object comes back or an error does.
//!
//! Wire shapes (field order is fixed):
//!
//! ```text
//! {"Transfer":{"from":hex,"to":hex,"amount":"dec","fee":"dec","nonce":dec,"signature":hex}}
//! {"MistbornAsset":{"from":hex,"action":name,"asset_id":hex,
//!   "data":{"density":name,"metadata":{..},"attributes":[],"game_id":str|null,"owner":hex},
//!   "fee":dec,"nonce":dec,"signature":hex}}
//! ```
//!
//! Transfer `amount`/`fee` are quoted so 64-bit values survive JSON number
//! parsing in other runtimes; the asset `fee` is a bare number because that
//! is what the node's asset endpoint accepts.

use std::borrow::Cow;
use std::collections::BTreeMap;

use haze_crypto::Signer;
use haze_transactions::{
    asset_payload, transfer_payload, AssetExtra, AssetTx, TransferTx, OTHER_ASSET_ID_KEY,
};
use haze_types::{bytes_to_hex, hex_to_array, Address, AssetAction, ChainScope, DensityLevel, Signature};
use serde::Serialize;

use crate::error::WalletError;
use crate::signed::SignedTransactionJson;

#[derive(Serialize)]
enum WireTransaction<'a> {
    Transfer(WireTransfer<'a>),
    MistbornAsset(WireAsset<'a>),
}

#[derive(Serialize)]
struct WireTransfer<'a> {
    from: &'a Address,
    to: &'a Address,
    amount: String,
    fee: String,
    nonce: u64,
    signature: &'a Signature,
}

#[derive(Serialize)]
struct WireAsset<'a> {
    from: &'a Address,
    action: AssetAction,
    asset_id: String,
    data: WireAssetData<'a>,
    fee: u64,
    nonce: u64,
    signature: &'a Signature,
}

#[derive(Serialize)]
struct WireAssetData<'a> {
    density: DensityLevel,
    metadata: &'a BTreeMap<String, String>,
    // Caller-supplied attributes are not forwarded yet; the node accepts an empty list.
    attributes: &'static [String],
    game_id: Option<&'a str>,
    owner: &'a Address,
}

/// Everything needed to sign any MistbornAsset action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetActionRequest {
    pub action: AssetAction,
    /// 64 hex characters.
    pub asset_id_hex: String,
    /// Data owner; the signer's own address when `None`.
    pub owner_hex: Option<String>,
    pub density: DensityLevel,
    /// Rendered in sorted key order. For Merge and Split the auxiliary
    /// fields travel here under `_other_asset_id` / `_components`.
    pub metadata: BTreeMap<String, String>,
    /// Empty means no game (`null` on the wire).
    pub game_id: String,
    pub fee: u64,
    pub nonce: u64,
    pub scope: ChainScope,
}

impl AssetActionRequest {
    pub fn new(action: AssetAction, asset_id_hex: impl Into<String>, density: DensityLevel) -> Self {
        Self {
            action,
            asset_id_hex: asset_id_hex.into(),
            owner_hex: None,
            density,
            metadata: BTreeMap::new(),
            game_id: String::new(),
            fee: 0,
            nonce: 0,
            scope: ChainScope::NONE,
        }
    }
}

/// Convert a signed integer from an engine-facing API into a payload field.
pub fn non_negative(field: &str, value: i64) -> Result<u64, WalletError> {
    u64::try_from(value)
        .map_err(|_| WalletError::InvalidInput(format!("{field} must not be negative, got {value}")))
}

fn sign_payload<S: Signer + ?Sized>(
    signer: &S,
    kind: &'static str,
    payload: &[u8],
) -> Result<Signature, WalletError> {
    let signature = signer.sign(payload)?;
    tracing::debug!(
        kind,
        payload_len = payload.len(),
        from = %signer.public_key(),
        "signed canonical payload"
    );
    Ok(signature)
}

fn log_rejected(kind: &'static str) -> impl Fn(&WalletError) {
    move |e| tracing::warn!(kind, error = %e, "transaction build rejected")
}

fn render(wire: &WireTransaction<'_>) -> Result<SignedTransactionJson, WalletError> {
    serde_json::to_string(wire)
        .map(SignedTransactionJson::new)
        .map_err(|e| WalletError::Serialization(e.to_string()))
}

/// Build and sign a Transfer of `amount` to `to_address_hex`.
pub fn build_signed_transfer<S: Signer + ?Sized>(
    signer: &S,
    to_address_hex: &str,
    amount: u64,
    fee: u64,
    nonce: u64,
    scope: ChainScope,
) -> Result<SignedTransactionJson, WalletError> {
    let build = || -> Result<SignedTransactionJson, WalletError> {
        let transfer = TransferTx::from_hex_recipient(
            *signer.public_key(),
            to_address_hex,
            amount,
            fee,
            nonce,
            scope,
        )?;
        let signature = sign_payload(signer, "Transfer", &transfer_payload(&transfer))?;

        render(&WireTransaction::Transfer(WireTransfer {
            from: &transfer.from,
            to: &transfer.to,
            amount: transfer.amount.to_string(),
            fee: transfer.fee.to_string(),
            nonce: transfer.nonce,
            signature: &signature,
        }))
    };
    build().inspect_err(log_rejected("Transfer"))
}

/// Build and sign a MistbornAsset Create owned by the signer.
///
/// Reserved auxiliary keys in `metadata` are rendered but never signed for a
/// Create.
#[allow(clippy::too_many_arguments)]
pub fn build_signed_mistborn_create<S: Signer + ?Sized>(
    signer: &S,
    asset_id_hex: &str,
    density: DensityLevel,
    metadata: &BTreeMap<String, String>,
    game_id: &str,
    fee: u64,
    nonce: u64,
    scope: ChainScope,
) -> Result<SignedTransactionJson, WalletError> {
    let request = AssetActionRequest {
        action: AssetAction::Create,
        asset_id_hex: asset_id_hex.to_string(),
        owner_hex: None,
        density,
        metadata: metadata.clone(),
        game_id: game_id.to_string(),
        fee,
        nonce,
        scope,
    };
    build_signed_asset_action(signer, &request)
}

/// Build and sign any MistbornAsset action.
pub fn build_signed_asset_action<S: Signer + ?Sized>(
    signer: &S,
    request: &AssetActionRequest,
) -> Result<SignedTransactionJson, WalletError> {
    asset_action(signer, request).inspect_err(log_rejected("MistbornAsset"))
}

/// Metadata as it goes on the wire. A Merge partner id is re-rendered from
/// the decoded bytes since the node hex-decodes it strictly.
fn rendered_metadata<'a>(
    metadata: &'a BTreeMap<String, String>,
    extra: &AssetExtra,
) -> Cow<'a, BTreeMap<String, String>> {
    match extra {
        AssetExtra::Merge { other_asset_id } => {
            let mut canonical = metadata.clone();
            canonical.insert(OTHER_ASSET_ID_KEY.to_string(), bytes_to_hex(other_asset_id));
            Cow::Owned(canonical)
        }
        _ => Cow::Borrowed(metadata),
    }
}

fn asset_action<S: Signer + ?Sized>(
    signer: &S,
    request: &AssetActionRequest,
) -> Result<SignedTransactionJson, WalletError> {
    let from = *signer.public_key();
    let asset_id = hex_to_array("asset id", &request.asset_id_hex)?;
    let owner = match &request.owner_hex {
        Some(hex) => Address::from_hex(hex)?,
        None => from,
    };
    let extra = AssetExtra::from_metadata(request.action, &request.metadata)?;

    let asset = AssetTx {
        from,
        action: request.action,
        asset_id,
        owner,
        density: request.density,
        extra,
        fee: request.fee,
        nonce: request.nonce,
        scope: request.scope,
    };
    let signature = sign_payload(signer, "MistbornAsset", &asset_payload(&asset))?;

    let metadata = rendered_metadata(&request.metadata, &asset.extra);
    let game_id = Some(request.game_id.as_str()).filter(|g| !g.is_empty());
    render(&WireTransaction::MistbornAsset(WireAsset {
        from: &asset.from,
        action: asset.action,
        asset_id: bytes_to_hex(&asset.asset_id),
        data: WireAssetData {
            density: asset.density,
            metadata: &metadata,
            attributes: &[],
            game_id,
            owner: &asset.owner,
        },
        fee: asset.fee,
        nonce: asset.nonce,
        signature: &signature,
    }))
}
