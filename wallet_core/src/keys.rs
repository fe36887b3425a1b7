//! Key management: generate, restore, back up.

use haze_crypto::KeyPair;

use crate::error::WalletError;

/// Generate a new primary key pair for a wallet.
pub fn generate_primary_keypair() -> Result<KeyPair, WalletError> {
    let kp = KeyPair::generate()?;
    tracing::info!(address = %kp.address(), "generated key pair");
    Ok(kp)
}

/// Restore a key pair from its 64-character hex seed.
pub fn import_seed_hex(seed_hex: &str) -> Result<KeyPair, WalletError> {
    Ok(KeyPair::from_seed_hex(seed_hex)?)
}

/// Export the seed as hex (for backup).
pub fn export_seed_hex(keypair: &KeyPair) -> String {
    keypair.seed_hex()
}

/// Whether this build can sign at all; check before offering signing to a user.
pub fn signing_available() -> bool {
    haze_crypto::is_signing_available()
}
