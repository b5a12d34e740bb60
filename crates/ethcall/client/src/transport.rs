//! Transport layer for batched calls
//!
//! This module provides the trait a batch dispatcher sends requests through.

use std::fmt;

use async_trait::async_trait;
use nexum_ethcall_core::{Request, Response};

/// Trait for JSON-RPC batch transports
///
/// Implementors send every request in one round trip and return exactly one
/// [`Response`] per request, in request order. A JSON-RPC error for a single
/// request is a [`Response`], not a [`TransportError`].
#[async_trait]
pub trait BatchTransport: fmt::Debug + Send + Sync {
    /// Send `requests` as one batch
    async fn batch_call(&self, requests: &[Request]) -> Result<Vec<Response>, TransportError>;
}

#[async_trait]
impl<T: BatchTransport + ?Sized> BatchTransport for std::sync::Arc<T> {
    async fn batch_call(&self, requests: &[Request]) -> Result<Vec<Response>, TransportError> {
        (**self).batch_call(requests).await
    }
}

/// Errors raised while delivering a batch
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Request parameters could not be serialized
    #[error("failed to encode request params: {0}")]
    Encode(#[from] serde_json::Error),

    /// The underlying JSON-RPC client failed
    #[error("rpc client error: {0}")]
    Client(#[from] jsonrpsee::core::client::Error),

    /// The transport did not return one response per request
    #[error("expected {expected} responses, got {actual}")]
    ResponseCount {
        /// Number of requests sent
        expected: usize,
        /// Number of responses received
        actual: usize,
    },

    /// Other transport failure
    #[error("{0}")]
    Message(String),
}

impl TransportError {
    /// Create a new error with a dynamic message
    pub fn message<S: Into<String>>(message: S) -> Self {
        Self::Message(message.into())
    }
}
