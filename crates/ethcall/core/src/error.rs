//! Core error type for all call factory operations
//!
//! Every failure a factory can report falls into one of three kinds: the
//! caller's arguments cannot be put on the wire, the node answered with a
//! JSON-RPC error, or the raw answer does not have the expected shape.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::call::CallState;

/// Core error type that encompasses all possible errors of a call factory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Arguments cannot be represented on the wire
    #[error(transparent)]
    ArgumentEncoding(#[from] ArgumentError),

    /// The node answered with an error
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The raw result could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A lifecycle step was invoked out of order
    #[error("invalid call state: cannot {operation} while {state}")]
    InvalidState {
        /// The operation that was attempted
        operation: &'static str,
        /// The state the factory was in
        state: CallState,
    },
}

impl Error {
    /// Create a new argument encoding error
    pub const fn argument(message: &'static str) -> Self {
        Self::ArgumentEncoding(ArgumentError(message))
    }

    /// Create a new decode error with a dynamic message
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode(DecodeError::new(message))
    }

    /// The "not found" protocol error
    pub const fn not_found() -> Self {
        Self::Protocol(ProtocolError::NotFound)
    }

    /// Whether this error was reported by the node
    pub const fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}

/// Caller-supplied arguments cannot be encoded, e.g. conflicting filter fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument: {0}")]
pub struct ArgumentError(pub &'static str);

/// Errors surfaced by the node
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// JSON-RPC error object, message kept verbatim
    #[error("{}", .0.message)]
    Rpc(ErrorPayload),

    /// The node returned `null` for a lookup
    #[error("not found")]
    NotFound,
}

/// JSON-RPC error object as returned by the node
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Display)]
#[display("Error {{ code: {}, message: {} }}", code, message)]
pub struct ErrorPayload {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
    /// Optional additional data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ErrorPayload {
    /// Create a payload without additional data
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach additional data
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// The raw result does not match the expected wire shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("decode error: {message}")]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Create a new decode error
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.into())
    }
}
