//! Log filter queries and their wire encoding

use std::{fmt, str::FromStr};

use alloy_primitives::{Address, B256};
use nexum_ethcall_core::{Error, quantity};
use serde_json::{Map, Value, json};

/// A block bound: a concrete height or a symbolic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockNumberOrTag {
    /// Most recent block
    Latest,
    /// Genesis block
    Earliest,
    /// Pending state
    Pending,
    /// Latest safe head
    Safe,
    /// Latest finalized block
    Finalized,
    /// Concrete block height
    Number(u64),
}

impl BlockNumberOrTag {
    /// The wire encoding: a hex quantity or the tag literal
    pub fn to_wire(&self) -> String {
        match self {
            Self::Latest => "latest".to_string(),
            Self::Earliest => "earliest".to_string(),
            Self::Pending => "pending".to_string(),
            Self::Safe => "safe".to_string(),
            Self::Finalized => "finalized".to_string(),
            Self::Number(n) => quantity::encode_u64(*n),
        }
    }

    /// The concrete height, if any
    pub const fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<u64> for BlockNumberOrTag {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for BlockNumberOrTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Error returned when parsing a [`BlockNumberOrTag`] from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid block {0:?}: expected a tag, decimal or hex height")]
pub struct ParseBlockError(String);

impl FromStr for BlockNumberOrTag {
    type Err = ParseBlockError;

    /// Accepts tags, decimal heights and hex quantities
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            "safe" => Ok(Self::Safe),
            "finalized" => Ok(Self::Finalized),
            _ if s.starts_with("0x") => quantity::parse_u64(s)
                .map(Self::Number)
                .map_err(|_| ParseBlockError(s.to_string())),
            _ => s
                .parse::<u64>()
                .map(Self::Number)
                .map_err(|_| ParseBlockError(s.to_string())),
        }
    }
}

/// Address, topic and block constraints selecting log entries
///
/// The block range (`from_block`/`to_block`) and `block_hash` are mutually
/// exclusive. An unset `from_block` means genesis, an unset `to_block` means
/// the latest block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Restrict to a single block
    pub block_hash: Option<B256>,
    /// Start of the block range, inclusive
    pub from_block: Option<BlockNumberOrTag>,
    /// End of the block range, inclusive
    pub to_block: Option<BlockNumberOrTag>,
    /// Emitting contracts, empty matches any
    pub addresses: Vec<Address>,
    /// Topic constraints by position, an empty position matches any
    pub topics: Vec<Vec<B256>>,
}

impl FilterQuery {
    /// Create an empty query matching every log of the latest range
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single block to search
    pub fn with_block_hash(mut self, hash: B256) -> Self {
        self.block_hash = Some(hash);
        self
    }

    /// Set the start of the block range
    pub fn with_from_block(mut self, block: impl Into<BlockNumberOrTag>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    /// Set the end of the block range
    pub fn with_to_block(mut self, block: impl Into<BlockNumberOrTag>) -> Self {
        self.to_block = Some(block.into());
        self
    }

    /// Add an emitting contract address
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    /// Set the accepted hashes for the topic at `position`
    pub fn with_topic(mut self, position: usize, hashes: impl IntoIterator<Item = B256>) -> Self {
        if self.topics.len() <= position {
            self.topics.resize_with(position + 1, Vec::new);
        }
        self.topics[position] = hashes.into_iter().collect();
        self
    }

    /// Encode as the `eth_getLogs` filter object
    pub fn to_filter_arg(&self) -> Result<Value, Error> {
        let mut arg = Map::new();
        arg.insert("address".to_string(), json!(self.addresses));
        arg.insert("topics".to_string(), json!(self.topics));

        if let Some(hash) = self.block_hash {
            if self.from_block.is_some() || self.to_block.is_some() {
                return Err(Error::argument(
                    "cannot specify both block hash and block range",
                ));
            }
            arg.insert("blockHash".to_string(), json!(hash));
        } else {
            let from = self
                .from_block
                .map_or_else(|| quantity::encode_u64(0), |b| b.to_wire());
            let to = self
                .to_block
                .unwrap_or(BlockNumberOrTag::Latest)
                .to_wire();
            arg.insert("fromBlock".to_string(), Value::String(from));
            arg.insert("toBlock".to_string(), Value::String(to));
        }

        Ok(Value::Object(arg))
    }
}
