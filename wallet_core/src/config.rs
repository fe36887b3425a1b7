//! Wallet configuration with TOML file support.

use std::path::Path;

use haze_types::ChainScope;
use haze_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Signing-side configuration.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Chain id bound into every signed payload. Absent means unscoped.
    #[serde(default)]
    pub chain_id: Option<u64>,

    /// Blocks after the current height a transaction stays valid.
    #[serde(default)]
    pub validity_window: Option<u64>,

    /// Fee used when the caller does not give one.
    #[serde(default)]
    pub default_fee: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            chain_id: None,
            validity_window: None,
            default_fee: 0,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

impl WalletConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, WalletError> {
        toml::from_str(contents).map_err(|e| WalletError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Chain scoping for a transaction built at `current_height`.
    ///
    /// `valid_until_height` is only set when both the window and the current
    /// height are known.
    pub fn chain_scope(&self, current_height: Option<u64>) -> ChainScope {
        let valid_until_height = match (current_height, self.validity_window) {
            (Some(height), Some(window)) => Some(height.saturating_add(window)),
            _ => None,
        };
        ChainScope::new(self.chain_id, valid_until_height)
    }

    pub fn parsed_log_format(&self) -> Result<LogFormat, WalletError> {
        self.log_format.parse().map_err(WalletError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = WalletConfig::from_toml_str("").unwrap();
        assert_eq!(config, WalletConfig::default());
        assert_eq!(config.chain_scope(Some(100)), ChainScope::NONE);
    }

    #[test]
    fn parses_all_fields() {
        let config = WalletConfig::from_toml_str(
            r#"
            chain_id = 7
            validity_window = 50
            default_fee = 10
            log_format = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.chain_id, Some(7));
        assert_eq!(config.default_fee, 10);
        assert_eq!(config.parsed_log_format().unwrap(), LogFormat::Json);
        assert_eq!(
            config.chain_scope(Some(1_000)),
            ChainScope::NONE.with_chain_id(7).with_valid_until_height(1_050)
        );
    }

    #[test]
    fn window_without_height_leaves_expiry_absent() {
        let config = WalletConfig {
            chain_id: Some(1),
            validity_window: Some(10),
            ..WalletConfig::default()
        };
        assert_eq!(config.chain_scope(None), ChainScope::NONE.with_chain_id(1));
    }

    #[test]
    fn expiry_saturates() {
        let config = WalletConfig {
            validity_window: Some(10),
            ..WalletConfig::default()
        };
        assert_eq!(config.chain_scope(Some(u64::MAX)).valid_until_height, Some(u64::MAX));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            WalletConfig::from_toml_str("chain_id = \"seven\""),
            Err(WalletError::Config(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chain_id = 3").unwrap();
        let config = WalletConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.chain_id, Some(3));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WalletConfig::from_toml_file(dir.path().join("absent.toml")),
            Err(WalletError::Config(_))
        ));
    }
}
