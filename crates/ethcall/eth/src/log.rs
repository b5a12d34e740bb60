//! Log entries as returned by `eth_getLogs` and inside receipts

use alloy_primitives::{Address, B256, Bytes};
use nexum_ethcall_core::quantity::u64_hex_opt;
use serde::{Deserialize, Serialize};

/// A contract log entry
///
/// Position fields are `None` for logs of pending blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Emitting contract
    pub address: Address,
    /// Indexed topics; the first is usually the event signature
    pub topics: Vec<B256>,
    /// Non-indexed event data
    pub data: Bytes,
    /// Block containing the transaction
    #[serde(default, with = "u64_hex_opt")]
    pub block_number: Option<u64>,
    /// Hash of the emitting transaction
    pub transaction_hash: B256,
    /// Index of the transaction within its block
    #[serde(default, with = "u64_hex_opt")]
    pub transaction_index: Option<u64>,
    /// Hash of the block containing the transaction
    #[serde(default)]
    pub block_hash: Option<B256>,
    /// Index of the log within its block
    #[serde(default, with = "u64_hex_opt")]
    pub log_index: Option<u64>,
    /// Set when the log was reverted by a chain reorganisation
    #[serde(default)]
    pub removed: bool,
}
