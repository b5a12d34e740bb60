//! Core traits and types for typed, batched Ethereum JSON-RPC calls
//!
//! This crate provides the building blocks shared by every call factory:
//!
//! - [`CallFactory`], the two-step contract a batch dispatcher drives
//! - [`Request`] and [`Response`], the wire-level descriptors exchanged with
//!   the transport
//! - [`CallState`], the per-call lifecycle guard
//! - [`Error`] and its kinds
//! - strict hex quantity encoding in [`quantity`]
//!
//! The transport itself is out of scope: anything able to send an ordered
//! batch of [`Request`]s and return one [`Response`] per request can drive
//! these factories.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod call;
pub mod error;
pub mod quantity;
pub mod request;

pub use call::{CallFactory, CallState};
pub use error::{ArgumentError, DecodeError, Error, ErrorPayload, ProtocolError};
pub use quantity::{HexU64, HexU256};
pub use request::{Request, Response};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::call::{CallFactory, CallState};
    pub use crate::error::{Error, ErrorPayload, ProtocolError};
    pub use crate::quantity::{HexU64, HexU256};
    pub use crate::request::{Request, Response};
}
