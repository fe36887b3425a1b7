//! Canonical signing payload.
//!
//! The node re-derives these exact bytes and verifies the signature over
//! them, so the layout is a wire contract: fixed field order, fixed widths,
//! every integer little-endian, optional chain fields omitted (not
//! zero-filled) when absent.
//!
//! ```text
//! Transfer:      "Transfer" | from[32] | to[32] | amount u64 | fee u64 | nonce u64
//!                | chain_id u64? | valid_until_height u64?
//! MistbornAsset: "MistbornAsset" | from[32] | action u8 | asset_id[32] | owner[32]
//!                | density u8 | other_asset_id[32] (Merge) / components utf8 (Split)
//!                | fee u64 | nonce u64 | chain_id u64? | valid_until_height u64?
//! ```

use haze_types::ChainScope;

use crate::asset::AssetTx;
use crate::transfer::TransferTx;

/// Domain tag that opens every Transfer payload.
pub const TRANSFER_TAG: &[u8; 8] = b"Transfer";

/// Domain tag that opens every MistbornAsset payload.
pub const MISTBORN_ASSET_TAG: &[u8; 13] = b"MistbornAsset";

/// Transfer payload length without chain fields.
pub const TRANSFER_BASE_LEN: usize = 8 + 32 + 32 + 8 + 8 + 8;

/// MistbornAsset payload length without auxiliary or chain fields.
pub const ASSET_BASE_LEN: usize = 13 + 32 + 1 + 32 + 32 + 1 + 8 + 8;

/// Append the optional chain-scoping fields, chain id first.
pub fn append_chain_fields(buf: &mut Vec<u8>, scope: &ChainScope) {
    if let Some(chain_id) = scope.chain_id {
        buf.extend_from_slice(&chain_id.to_le_bytes());
    }
    if let Some(height) = scope.valid_until_height {
        buf.extend_from_slice(&height.to_le_bytes());
    }
}

/// Canonical bytes signed for a Transfer.
pub fn transfer_payload(tx: &TransferTx) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TRANSFER_BASE_LEN + tx.scope.encoded_len());
    buf.extend_from_slice(TRANSFER_TAG);
    buf.extend_from_slice(tx.from.as_bytes());
    buf.extend_from_slice(tx.to.as_bytes());
    buf.extend_from_slice(&tx.amount.to_le_bytes());
    buf.extend_from_slice(&tx.fee.to_le_bytes());
    buf.extend_from_slice(&tx.nonce.to_le_bytes());
    append_chain_fields(&mut buf, &tx.scope);
    buf
}

/// Canonical bytes signed for a MistbornAsset action.
pub fn asset_payload(tx: &AssetTx) -> Vec<u8> {
    let extra = tx.extra_bytes();
    let mut buf = Vec::with_capacity(ASSET_BASE_LEN + extra.len() + tx.scope.encoded_len());
    buf.extend_from_slice(MISTBORN_ASSET_TAG);
    buf.extend_from_slice(tx.from.as_bytes());
    buf.push(tx.action.code());
    buf.extend_from_slice(&tx.asset_id);
    buf.extend_from_slice(tx.owner.as_bytes());
    buf.push(tx.density.code());
    buf.extend_from_slice(extra);
    buf.extend_from_slice(&tx.fee.to_le_bytes());
    buf.extend_from_slice(&tx.nonce.to_le_bytes());
    append_chain_fields(&mut buf, &tx.scope);
    buf
}
