use std::path::PathBuf;

use alloy_primitives::{Address, B256};
use clap::{Parser, Subcommand};
use nexum_ethcall_client::{Client, ClientConfig, eth::BlockNumberOrTag};
use tracing::debug;

mod commands;

/// Query an Ethereum node with typed, batched JSON-RPC calls
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Node JSON-RPC URL, overrides the config file and `ETHCALL_RPC_URL`
    #[arg(short, long, global = true, value_name = "RPC_URL")]
    rpc_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Batch timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Debug level output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the number of the most recent block
    BlockNumber,

    /// Print the current gas price in wei
    GasPrice,

    /// Print the receipt of a transaction
    Receipt {
        /// Transaction hash
        hash: B256,

        /// Print the wire-shaped receipt with hex quantities
        #[arg(long)]
        raw: bool,
    },

    /// Print the logs matching a filter
    Logs {
        /// Emitting contract, may be repeated
        #[arg(long = "address", value_name = "ADDRESS")]
        addresses: Vec<Address>,

        /// Topic hashes for the next position, comma separated; empty matches any
        #[arg(long = "topic", value_name = "HASHES")]
        topics: Vec<commands::Topic>,

        /// Start of the block range
        #[arg(long, value_name = "BLOCK", conflicts_with = "block_hash")]
        from: Option<BlockNumberOrTag>,

        /// End of the block range
        #[arg(long, value_name = "BLOCK", conflicts_with = "block_hash")]
        to: Option<BlockNumberOrTag>,

        /// Restrict to a single block
        #[arg(long, value_name = "HASH")]
        block_hash: Option<B256>,
    },

    /// Print block number and gas price fetched in one batch
    Summary,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.rpc_url {
        config = config.with_rpc_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_request_timeout_secs(secs);
    }
    debug!(?config, "Loaded config");

    let client = Client::from_config(&config)?;
    match cli.command {
        Commands::BlockNumber => commands::block_number(&client).await?,
        Commands::GasPrice => commands::gas_price(&client).await?,
        Commands::Receipt { hash, raw } => commands::receipt(&client, hash, raw).await?,
        Commands::Logs {
            addresses,
            topics,
            from,
            to,
            block_hash,
        } => {
            let query = commands::filter_query(addresses, topics, from, to, block_hash);
            commands::logs(&client, query).await?
        }
        Commands::Summary => commands::summary(&client).await?,
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();
}
