//! Wallet core library for HAZE.
//!
//! Provides what a game client or wallet needs to produce a submittable
//! transaction without talking to the network:
//! - Key generation, restore and backup
//! - Transaction building and signing (Transfer, MistbornAsset)
//! - Wire JSON rendering and the submission envelope
//! - TOML configuration for chain scoping and logging

pub mod config;
pub mod error;
pub mod keys;
pub mod signed;
pub mod transaction_builder;

pub use config::WalletConfig;
pub use error::WalletError;
pub use signed::SignedTransactionJson;
pub use transaction_builder::{
    build_signed_asset_action, build_signed_mistborn_create, build_signed_transfer, non_negative,
    AssetActionRequest,
};
