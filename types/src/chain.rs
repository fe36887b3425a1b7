//! Optional chain-scoping fields.

use serde::{Deserialize, Serialize};

/// Replay-protection fields appended to a signed payload.
///
/// Each field is independently present or absent. An absent field contributes
/// no bytes to the payload, which is different from a present zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainScope {
    /// Network the transaction is valid on.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Last block height at which the transaction may be included.
    #[serde(default)]
    pub valid_until_height: Option<u64>,
}

impl ChainScope {
    /// No chain scoping at all.
    pub const NONE: Self = Self {
        chain_id: None,
        valid_until_height: None,
    };

    pub fn new(chain_id: Option<u64>, valid_until_height: Option<u64>) -> Self {
        Self {
            chain_id,
            valid_until_height,
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn with_valid_until_height(mut self, height: u64) -> Self {
        self.valid_until_height = Some(height);
        self
    }

    /// Number of payload bytes these fields add.
    pub fn encoded_len(&self) -> usize {
        8 * (self.chain_id.is_some() as usize + self.valid_until_height.is_some() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_counts_present_fields() {
        assert_eq!(ChainScope::NONE.encoded_len(), 0);
        assert_eq!(ChainScope::NONE.with_chain_id(0).encoded_len(), 8);
        assert_eq!(
            ChainScope::NONE.with_chain_id(1).with_valid_until_height(9).encoded_len(),
            16
        );
        assert_eq!(ChainScope::NONE.with_valid_until_height(9).encoded_len(), 8);
    }

    #[test]
    fn zero_is_distinct_from_absent() {
        assert_ne!(ChainScope::NONE.with_chain_id(0), ChainScope::NONE);
    }
}
