//! Subcommand handlers

use std::str::FromStr;

use alloy_primitives::{Address, B256, U256};
use nexum_ethcall_client::{
    BatchTransport, Client,
    eth::{self, BlockNumberOrTag, FilterQuery, RawReceipt, Receipt},
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

/// Accepted hashes for one topic position
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Topic(pub(crate) Vec<B256>);

impl FromStr for Topic {
    type Err = String;

    /// Comma separated hashes; an empty string matches any topic
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|hash| !hash.is_empty())
            .map(|hash| {
                hash.parse::<B256>()
                    .map_err(|err| format!("invalid topic {hash:?}: {err}"))
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

/// Build the `eth_getLogs` filter from command-line arguments
pub(crate) fn filter_query(
    addresses: Vec<Address>,
    topics: Vec<Topic>,
    from: Option<BlockNumberOrTag>,
    to: Option<BlockNumberOrTag>,
    block_hash: Option<B256>,
) -> FilterQuery {
    FilterQuery {
        block_hash,
        from_block: from,
        to_block: to,
        addresses,
        topics: topics.into_iter().map(|topic| topic.0).collect(),
    }
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn block_number<T: BatchTransport>(client: &Client<T>) -> eyre::Result<()> {
    let mut block_number = U256::ZERO;
    client
        .call(&mut [&mut eth::block_number().returns(&mut block_number)])
        .await?;
    println!("{block_number}");
    Ok(())
}

pub(crate) async fn gas_price<T: BatchTransport>(client: &Client<T>) -> eyre::Result<()> {
    let mut gas_price = U256::ZERO;
    client
        .call(&mut [&mut eth::gas_price().returns(&mut gas_price)])
        .await?;
    println!("{gas_price}");
    Ok(())
}

pub(crate) async fn receipt<T: BatchTransport>(
    client: &Client<T>,
    hash: B256,
    raw: bool,
) -> eyre::Result<()> {
    if raw {
        let mut receipt = RawReceipt::default();
        client
            .call(&mut [&mut eth::transaction_receipt(hash).returns_raw(&mut receipt)])
            .await?;
        print_json(&receipt)
    } else {
        let mut receipt = Receipt::default();
        client
            .call(&mut [&mut eth::transaction_receipt(hash).returns(&mut receipt)])
            .await?;
        print_json(&receipt)
    }
}

pub(crate) async fn logs<T: BatchTransport>(
    client: &Client<T>,
    query: FilterQuery,
) -> eyre::Result<()> {
    let mut logs = Vec::new();
    client
        .call(&mut [&mut eth::logs(query).returns(&mut logs)])
        .await?;
    info!(count = logs.len(), "Fetched logs");
    print_json(&logs)
}

pub(crate) async fn summary<T: BatchTransport>(client: &Client<T>) -> eyre::Result<()> {
    let mut block_number = U256::ZERO;
    let mut gas_price = U256::ZERO;
    client
        .call(&mut [
            &mut eth::block_number().returns(&mut block_number),
            &mut eth::gas_price().returns(&mut gas_price),
        ])
        .await?;
    print_json(&json!({
        "blockNumber": block_number.to_string(),
        "gasPrice": gas_price.to_string(),
    }))
}
