//! Transfer transaction: move HAZE between accounts.

use haze_types::{Address, ChainScope};
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// An unsigned HAZE transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTx {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
    pub fee: u64,
    pub nonce: u64,
    #[serde(default)]
    pub scope: ChainScope,
}

impl TransferTx {
    /// Build a transfer from a hex recipient; it must decode to exactly 32 bytes.
    pub fn from_hex_recipient(
        from: Address,
        to_hex: &str,
        amount: u64,
        fee: u64,
        nonce: u64,
        scope: ChainScope,
    ) -> Result<Self, TransactionError> {
        let to = Address::from_hex(to_hex)?;
        Ok(Self {
            from,
            to,
            amount,
            fee,
            nonce,
            scope,
        })
    }
}
