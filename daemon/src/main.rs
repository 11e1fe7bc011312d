//! txbook: command line access to a wallet's transaction store.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;

use txbook_codec::{BitcoinCodec, TransactionCodec};
use txbook_types::NetworkId;
use txbook_utils::LogFormat;
use txbook_wallet_core::{
    load_or_empty, save_collection, Confirmation, TracingDiagnostics, TransactionRecord,
    WalletConfig,
};

#[derive(Parser)]
#[command(name = "txbook", about = "Wallet transaction store")]
struct Cli {
    /// Network addresses are rendered for: "mainnet", "testnet", "signet" or "regtest".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "TXBOOK_NETWORK")]
    network: Option<NetworkId>,

    /// JSON file holding the transaction collection.
    #[arg(long, env = "TXBOOK_STORE")]
    store: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TXBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TXBOOK_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Decode a raw transaction and add it to the store.
    Import {
        /// Raw transaction, hex encoded.
        #[arg(long = "hex")]
        raw: String,
        /// Id to store the transaction under. Defaults to the computed txid.
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(long)]
        timestamp: Option<u64>,
    },
    /// Print one record.
    Show { id: String },
    /// Print one output of a stored transaction.
    Output { id: String, index: usize },
    /// List stored transactions in insertion order.
    List,
    /// Record the confirmation of a stored transaction.
    Confirm {
        id: String,
        #[arg(long)]
        height: u32,
        #[arg(long)]
        timestamp: u64,
    },
    /// Drop a transaction from the store.
    Remove { id: String },
    /// Check every stored id against its transaction contents.
    Verify,
}

fn resolve_config(cli: &Cli) -> anyhow::Result<WalletConfig> {
    let base = match cli.config {
        Some(ref path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WalletConfig::default(),
    };
    Ok(WalletConfig {
        network: cli.network.unwrap_or(base.network),
        store_path: cli.store.clone().unwrap_or(base.store_path),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        log_format: cli
            .log_format
            .map(|f| f.as_str().to_string())
            .unwrap_or(base.log_format),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let log_format: LogFormat = config.log_format.parse()?;
    txbook_utils::init_logging(log_format, &config.log_level);
    if cli.config.is_some() {
        tracing::info!(
            network = %config.network,
            store = %config.store_path.display(),
            "loaded config"
        );
    }

    let codec = BitcoinCodec::new(config.network);
    let collection = load_or_empty(&codec, &config.store_path)?;

    match cli.command {
        Command::Import {
            raw,
            id,
            height,
            timestamp,
        } => {
            let bytes = hex::decode(raw.trim()).context("transaction is not valid hex")?;
            let transaction = codec.decode(&bytes)?;
            let id = id.unwrap_or_else(|| transaction.compute_txid().to_string());
            if collection.contains(&id) {
                tracing::info!(tx = %id, "replacing existing record");
            }
            let record = TransactionRecord::new(
                &codec,
                &TracingDiagnostics,
                transaction,
                id.clone(),
                None,
                Confirmation { height, timestamp },
            );
            let updated = collection.insert(record);
            save_collection(&updated, &codec, &config.store_path)?;
            println!("{id}");
        }
        Command::Show { id } => {
            let Some(record) = collection.get(&id) else {
                bail!("no transaction {id} in store");
            };
            let summary = serde_json::json!({
                "id": record.id(),
                "inputReferences": record.input_references(),
                "outputAddresses": record.output_addresses(),
                "height": record.height(),
                "timestamp": record.timestamp(),
                "idMatchesTransaction": record.id_matches_transaction(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Output { id, index } => {
            let Some(output) = collection.get_output(&id, index) else {
                bail!("no output {index} for transaction {id}");
            };
            println!(
                "{} sat {}",
                output.value.to_sat(),
                hex::encode(output.script_pubkey.as_bytes())
            );
        }
        Command::List => {
            for record in collection.iter() {
                match record.height() {
                    Some(height) => println!("{} confirmed at {height}", record.id()),
                    None => println!("{} unconfirmed", record.id()),
                }
            }
        }
        Command::Confirm {
            id,
            height,
            timestamp,
        } => {
            if !collection.contains(&id) {
                bail!("no transaction {id} in store");
            }
            let updated = collection.confirm(&id, Confirmation::at(height, timestamp));
            save_collection(&updated, &codec, &config.store_path)?;
            tracing::info!(tx = %id, height, "confirmation recorded");
        }
        Command::Remove { id } => {
            if !collection.contains(&id) {
                bail!("no transaction {id} in store");
            }
            let updated = collection.remove(&id);
            save_collection(&updated, &codec, &config.store_path)?;
        }
        Command::Verify => {
            let mismatched: Vec<&str> = collection
                .iter()
                .filter(|record| !record.id_matches_transaction())
                .map(|record| record.id())
                .collect();
            for id in &mismatched {
                tracing::warn!(tx = %id, "stored id does not match transaction contents");
            }
            println!(
                "{} records, {} mismatched ids",
                collection.len(),
                mismatched.len()
            );
        }
    }

    Ok(())
}
