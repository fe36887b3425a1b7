//! Signature verification over the canonical payload.
//!
//! This is the check the node runs before accepting a transaction.

use haze_crypto::verify_signature;
use haze_types::Signature;

use crate::error::TransactionError;
use crate::Transaction;

/// Verify that `signature` is the sender's signature over the canonical payload of `tx`.
pub fn verify_transaction(tx: &Transaction, signature: &Signature) -> Result<(), TransactionError> {
    let payload = tx.signing_payload();
    if verify_signature(&payload, signature, tx.sender()) {
        Ok(())
    } else {
        Err(TransactionError::InvalidSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetTx, TransferTx};
    use haze_crypto::{KeyPair, Signer};
    use haze_types::{Address, ChainScope, DensityLevel, PrivateKey};

    fn keypair() -> KeyPair {
        KeyPair::from_seed(PrivateKey([9u8; 32])).unwrap()
    }

    fn transfer(kp: &KeyPair) -> Transaction {
        Transaction::Transfer(TransferTx {
            from: *kp.address(),
            to: Address::new([0x11; 32]),
            amount: 1000,
            fee: 10,
            nonce: 1,
            scope: ChainScope::NONE.with_chain_id(2),
        })
    }

    #[test]
    fn signed_transfer_verifies() {
        let kp = keypair();
        let tx = transfer(&kp);
        let sig = kp.sign(&tx.signing_payload()).unwrap();
        assert_eq!(verify_transaction(&tx, &sig), Ok(()));
    }

    #[test]
    fn tampered_amount_fails() {
        let kp = keypair();
        let tx = transfer(&kp);
        let sig = kp.sign(&tx.signing_payload()).unwrap();
        let Transaction::Transfer(mut inner) = tx else {
            unreachable!()
        };
        inner.amount += 1;
        assert_eq!(
            verify_transaction(&Transaction::Transfer(inner), &sig),
            Err(TransactionError::InvalidSignature)
        );
    }

    #[test]
    fn dropping_chain_scope_fails() {
        let kp = keypair();
        let tx = transfer(&kp);
        let sig = kp.sign(&tx.signing_payload()).unwrap();
        let Transaction::Transfer(mut inner) = tx else {
            unreachable!()
        };
        inner.scope = ChainScope::NONE;
        assert!(verify_transaction(&Transaction::Transfer(inner), &sig).is_err());
    }

    #[test]
    fn signed_asset_create_verifies() {
        let kp = keypair();
        let tx = Transaction::MistbornAsset(AssetTx::create(
            *kp.address(),
            [0x42; 32],
            DensityLevel::Ethereal,
            1,
            4,
            ChainScope::NONE,
        ));
        let sig = kp.sign(&tx.signing_payload()).unwrap();
        assert!(verify_transaction(&tx, &sig).is_ok());
    }
}
