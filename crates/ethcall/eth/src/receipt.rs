//! Transaction receipt types
//!
//! [`RawReceipt`] mirrors the `eth_getTransactionReceipt` wire object and
//! keeps hex quantities as [`HexU64`]/[`HexU256`]. [`Receipt`] is the native
//! form with plain integers and a typed [`ReceiptStatus`].

use alloy_primitives::{Address, B256, Bloom, U256};
use nexum_ethcall_core::{DecodeError, HexU64, HexU256};
use serde::{Deserialize, Serialize};

use crate::log::Log;

/// Outcome of transaction execution
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReceiptStatus {
    /// Execution reverted (`0x0`)
    #[default]
    Failed,
    /// Execution succeeded (`0x1`)
    Successful,
}

impl ReceiptStatus {
    /// Whether execution succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Successful)
    }

    /// The wire code
    pub const fn code(&self) -> u64 {
        match self {
            Self::Failed => 0,
            Self::Successful => 1,
        }
    }
}

impl TryFrom<u64> for ReceiptStatus {
    type Error = DecodeError;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Failed),
            1 => Ok(Self::Successful),
            other => Err(DecodeError::new(format!(
                "invalid receipt status {other:#x}, expected 0x0 or 0x1"
            ))),
        }
    }
}

/// Receipt in its wire shape
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    /// Transaction hash
    pub transaction_hash: B256,
    /// Index of the transaction within its block
    pub transaction_index: HexU64,
    /// Hash of the containing block
    pub block_hash: B256,
    /// Number of the containing block
    pub block_number: HexU256,
    /// Sender
    pub from: Address,
    /// Recipient, `None` for contract creation
    pub to: Option<Address>,
    /// Gas used in the block up to and including this transaction
    pub cumulative_gas_used: HexU64,
    /// Gas used by this transaction
    pub gas_used: HexU64,
    /// Created contract, if any
    pub contract_address: Option<Address>,
    /// Logs emitted by this transaction
    pub logs: Vec<Log>,
    /// Bloom filter of the emitted logs
    pub logs_bloom: Bloom,
    /// Transaction type
    #[serde(rename = "type", default)]
    pub tx_type: HexU64,
    /// Execution status code, `0x0` or `0x1`
    pub status: HexU64,
}

/// Receipt in its native shape
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Transaction type
    #[serde(rename = "type")]
    pub tx_type: u8,
    /// Execution outcome
    pub status: ReceiptStatus,
    /// Gas used in the block up to and including this transaction
    pub cumulative_gas_used: u64,
    /// Bloom filter of the emitted logs
    #[serde(rename = "logsBloom")]
    pub bloom: Bloom,
    /// Logs emitted by this transaction
    pub logs: Vec<Log>,
    /// Transaction hash
    pub transaction_hash: B256,
    /// Created contract, if any
    pub contract_address: Option<Address>,
    /// Gas used by this transaction
    pub gas_used: u64,
    /// Hash of the containing block
    pub block_hash: B256,
    /// Number of the containing block
    pub block_number: U256,
    /// Index of the transaction within its block
    pub transaction_index: u64,
}

impl TryFrom<RawReceipt> for Receipt {
    type Error = DecodeError;

    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        let status = ReceiptStatus::try_from(raw.status.0)?;
        let tx_type = u8::try_from(raw.tx_type.0).map_err(|_| {
            DecodeError::new(format!("invalid transaction type {}", raw.tx_type))
        })?;

        Ok(Self {
            tx_type,
            status,
            cumulative_gas_used: raw.cumulative_gas_used.0,
            bloom: raw.logs_bloom,
            logs: raw.logs,
            transaction_hash: raw.transaction_hash,
            contract_address: raw.contract_address,
            gas_used: raw.gas_used.0,
            block_hash: raw.block_hash,
            block_number: raw.block_number.0,
            transaction_index: raw.transaction_index.0,
        })
    }
}
