//! Typed call factories for the `eth_*` JSON-RPC namespace
//!
//! Each factory captures its arguments, builds the wire request and decodes
//! the node's answer into a destination owned by the caller:
//!
//! ```
//! use alloy_primitives::U256;
//! use nexum_ethcall_eth as eth;
//!
//! let mut block_number = U256::ZERO;
//! let call = eth::block_number().returns(&mut block_number);
//! # let _ = call;
//! ```
//!
//! Factories are handed to a batch dispatcher, which sends all their
//! requests in one round trip.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod block_number;
pub mod filter;
pub mod gas_price;
pub mod log;
pub mod logs;
pub mod receipt;
pub mod transaction_receipt;

#[cfg(test)]
mod test_utils;

use alloy_primitives::B256;

pub use block_number::BlockNumber;
pub use filter::{BlockNumberOrTag, FilterQuery};
pub use gas_price::GasPrice;
pub use log::Log;
pub use logs::Logs;
pub use receipt::{RawReceipt, Receipt, ReceiptStatus};
pub use transaction_receipt::{ReceiptDestination, TransactionReceipt};

/// Request the number of the most recent block
pub fn block_number<'a>() -> BlockNumber<'a> {
    BlockNumber::new()
}

/// Request the current gas price in wei
pub fn gas_price<'a>() -> GasPrice<'a> {
    GasPrice::new()
}

/// Request the logs matching `query`
pub fn logs<'a>(query: FilterQuery) -> Logs<'a> {
    Logs::new(query)
}

/// Request the receipt of the transaction `hash`
pub fn transaction_receipt<'a>(hash: B256) -> TransactionReceipt<'a> {
    TransactionReceipt::new(hash)
}
