//! HAZE signer: produces signed, submittable transaction JSON offline.
//!
//! Nothing here touches the network. The printed JSON (or, with
//! `--envelope`, the `{"transaction":...}` body) is handed to whatever
//! submits it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use haze_crypto::KeyPair;
use haze_transactions::{COMPONENTS_KEY, OTHER_ASSET_ID_KEY};
use haze_types::{AssetAction, ChainScope, DensityLevel};
use haze_wallet_core::{
    build_signed_asset_action, build_signed_transfer, non_negative, AssetActionRequest,
    SignedTransactionJson, WalletConfig,
};

#[derive(Parser)]
#[command(name = "haze-signer", about = "HAZE offline transaction signer", version)]
struct Cli {
    /// Path to a TOML configuration file. Flags override its values.
    #[arg(long, env = "HAZE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "HAZE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh key pair and print its seed and address.
    Keygen,

    /// Print the address belonging to a seed.
    Address {
        /// 64 hex characters.
        #[arg(long, env = "HAZE_SEED")]
        seed: String,
    },

    /// Sign a Transfer.
    Transfer {
        #[command(flatten)]
        common: CommonArgs,

        /// Recipient address, 64 hex characters.
        #[arg(long)]
        to: String,

        #[arg(long, allow_negative_numbers = true)]
        amount: i64,
    },

    /// Sign a MistbornAsset Create owned by the signer.
    CreateAsset {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        asset: AssetArgs,
    },

    /// Sign any MistbornAsset action.
    AssetAction {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        asset: AssetArgs,

        /// Create, Update, Condense, Evaporate, Merge or Split.
        #[arg(long)]
        action: AssetAction,

        /// Data owner; defaults to the signer.
        #[arg(long)]
        owner: Option<String>,

        /// Partner asset for a Merge.
        #[arg(long)]
        other_asset_id: Option<String>,

        /// Component description for a Split, signed verbatim.
        #[arg(long)]
        components: Option<String>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Signer seed, 64 hex characters.
    #[arg(long, env = "HAZE_SEED", hide_env_values = true)]
    seed: String,

    /// Defaults to `default_fee` from the config file.
    #[arg(long, allow_negative_numbers = true)]
    fee: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    nonce: i64,

    /// Overrides `chain_id` from the config file.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Current chain height; with `validity_window` it sets the expiry.
    #[arg(long)]
    height: Option<u64>,

    /// Explicit expiry height, overriding the computed one.
    #[arg(long)]
    valid_until_height: Option<u64>,

    /// Print the submission body instead of the bare transaction.
    #[arg(long)]
    envelope: bool,
}

#[derive(Args)]
struct AssetArgs {
    /// 64 hex characters.
    #[arg(long)]
    asset_id: String,

    /// Ethereal, Light, Dense or Core.
    #[arg(long, default_value = "Ethereal")]
    density: DensityLevel,

    /// Metadata entry as key=value; repeatable.
    #[arg(long = "meta", value_parser = parse_key_val)]
    metadata: Vec<(String, String)>,

    #[arg(long, default_value = "")]
    game_id: String,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

impl CommonArgs {
    fn scope(&self, config: &WalletConfig) -> ChainScope {
        let base = config.chain_scope(self.height);
        ChainScope::new(
            self.chain_id.or(base.chain_id),
            self.valid_until_height.or(base.valid_until_height),
        )
    }

    fn fee(&self, config: &WalletConfig) -> anyhow::Result<u64> {
        match self.fee {
            Some(fee) => Ok(non_negative("fee", fee)?),
            None => Ok(config.default_fee),
        }
    }

    fn keypair(&self) -> anyhow::Result<KeyPair> {
        KeyPair::from_seed_hex(&self.seed).context("invalid signer seed")
    }

    fn emit(&self, signed: SignedTransactionJson) {
        if self.envelope {
            println!("{}", signed.submission_body());
        } else {
            println!("{signed}");
        }
    }
}

impl AssetArgs {
    fn request(&self, action: AssetAction) -> AssetActionRequest {
        let mut request = AssetActionRequest::new(action, self.asset_id.clone(), self.density);
        request.metadata = self.metadata.iter().cloned().collect::<BTreeMap<_, _>>();
        request.game_id = self.game_id.clone();
        request
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<WalletConfig> {
    match path {
        Some(path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(WalletConfig::default()),
    }
}

fn sign_asset(
    config: &WalletConfig,
    common: &CommonArgs,
    mut request: AssetActionRequest,
) -> anyhow::Result<()> {
    let keypair = common.keypair()?;
    request.fee = common.fee(config)?;
    request.nonce = non_negative("nonce", common.nonce)?;
    request.scope = common.scope(config);

    let signed = build_signed_asset_action(&keypair, &request)?;
    common.emit(signed);
    Ok(())
}

fn run(cli: Cli, config: WalletConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Keygen => {
            let keypair = haze_wallet_core::keys::generate_primary_keypair()?;
            println!("seed:    {}", keypair.seed_hex());
            println!("address: {}", keypair.address_hex());
        }
        Command::Address { seed } => {
            let keypair = KeyPair::from_seed_hex(&seed).context("invalid seed")?;
            println!("{}", keypair.address_hex());
        }
        Command::Transfer { common, to, amount } => {
            let keypair = common.keypair()?;
            let signed = build_signed_transfer(
                &keypair,
                &to,
                non_negative("amount", amount)?,
                common.fee(&config)?,
                non_negative("nonce", common.nonce)?,
                common.scope(&config),
            )?;
            common.emit(signed);
        }
        Command::CreateAsset { common, asset } => {
            sign_asset(&config, &common, asset.request(AssetAction::Create))?;
        }
        Command::AssetAction {
            common,
            asset,
            action,
            owner,
            other_asset_id,
            components,
        } => {
            let mut request = asset.request(action);
            request.owner_hex = owner;
            if let Some(id) = other_asset_id {
                request.metadata.insert(OTHER_ASSET_ID_KEY.to_string(), id);
            }
            if let Some(components) = components {
                request
                    .metadata
                    .insert(COMPONENTS_KEY.to_string(), components);
            }
            sign_asset(&config, &common, request)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let format = config.parsed_log_format()?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if !haze_utils::init_logging(format, level) {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }

    tracing::debug!(
        chain_id = ?config.chain_id,
        validity_window = ?config.validity_window,
        "configuration resolved"
    );

    run(cli, config)
}
