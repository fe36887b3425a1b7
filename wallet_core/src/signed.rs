//! The signed, wire-ready transaction text.

use std::fmt;

use crate::error::WalletError;

/// Inner transaction JSON as accepted by the node, e.g. `{"Transfer":{...}}`.
///
/// Only the builders in [`crate::transaction_builder`] construct this, so a
/// value of this type is always a complete, signed object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransactionJson(String);

impl SignedTransactionJson {
    pub(crate) fn new(json: String) -> Self {
        Self(json)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Request body for the transaction-submission endpoint: `{"transaction":<inner>}`.
    pub fn submission_body(&self) -> String {
        format!("{{\"transaction\":{}}}", self.0)
    }

    /// Collapse a build result into the "empty string means do not submit"
    /// convention some callers expect.
    pub fn or_empty(result: Result<Self, WalletError>) -> String {
        result.map(Self::into_string).unwrap_or_default()
    }
}

impl fmt::Display for SignedTransactionJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignedTransactionJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
