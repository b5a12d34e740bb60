//! Batch dispatcher and JSON-RPC transport for `nexum-ethcall` factories
//!
//! ```no_run
//! use alloy_primitives::U256;
//! use nexum_ethcall_client::{Client, ClientConfig, eth};
//!
//! # async fn run() -> Result<(), nexum_ethcall_client::ClientError> {
//! let client = Client::from_config(&ClientConfig::default())?;
//!
//! let mut block_number = U256::ZERO;
//! let mut gas_price = U256::ZERO;
//! client
//!     .call(&mut [
//!         &mut eth::block_number().returns(&mut block_number),
//!         &mut eth::gas_price().returns(&mut gas_price),
//!     ])
//!     .await?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, ConfigError};
pub use error::{CallErrors, ClientError};
pub use http::HttpTransport;
pub use transport::{BatchTransport, TransportError};

pub use nexum_ethcall_core::{CallFactory, Error, ErrorPayload, ProtocolError, Request, Response};
pub use nexum_ethcall_eth as eth;
