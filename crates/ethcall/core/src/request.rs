//! Wire-level request and response descriptors
//!
//! A [`Request`] is what a factory hands to the transport, a [`Response`] is
//! what the transport hands back for that same request.

use derive_more::Display;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::trace;

use crate::error::{DecodeError, Error, ErrorPayload, ProtocolError};

/// A single JSON-RPC call, ready to be put in a batch
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Request {{ method: {}, params: {:?} }}", method, params)]
pub struct Request {
    method: &'static str,
    params: Vec<Value>,
}

impl Request {
    /// Create a request without parameters
    pub const fn new(method: &'static str) -> Self {
        Self {
            method,
            params: Vec::new(),
        }
    }

    /// Create a request with already encoded parameters
    pub const fn with_params(method: &'static str, params: Vec<Value>) -> Self {
        Self { method, params }
    }

    /// Create a request from a single serializable parameter
    pub fn with_param<P: Serialize>(method: &'static str, param: P) -> Result<Self, Error> {
        let param = serde_json::to_value(param)
            .map_err(|_| Error::argument("parameter is not representable as JSON"))?;
        Ok(Self::with_params(method, vec![param]))
    }

    /// The JSON-RPC method name
    pub const fn method(&self) -> &'static str {
        self.method
    }

    /// The ordered parameter list
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// The transport's answer to a single [`Request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    result: Result<Value, ErrorPayload>,
}

impl Response {
    /// A successful response carrying the raw `result` value
    pub const fn success(value: Value) -> Self {
        Self { result: Ok(value) }
    }

    /// A response carrying a JSON-RPC error object
    pub const fn failure(error: ErrorPayload) -> Self {
        Self { result: Err(error) }
    }

    /// Whether the node reported an error
    pub const fn is_error(&self) -> bool {
        self.result.is_err()
    }

    /// The raw result, or the node's error
    pub const fn result(&self) -> &Result<Value, ErrorPayload> {
        &self.result
    }

    /// Take the raw value, propagating the node's error untouched
    pub fn into_value(self) -> Result<Value, Error> {
        self.result
            .map_err(|payload| Error::Protocol(ProtocolError::Rpc(payload)))
    }

    /// Decode into `T`, treating `null` as absent
    pub fn decode_optional<T: DeserializeOwned>(self) -> Result<Option<T>, Error> {
        match self.into_value()? {
            Value::Null => Ok(None),
            value => {
                trace!(target_type = std::any::type_name::<T>(), "Decoding raw result");
                serde_json::from_value(value)
                    .map(Some)
                    .map_err(|err| Error::Decode(DecodeError::from(err)))
            }
        }
    }

    /// Decode into `T`, rejecting `null`
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        self.decode_optional()?
            .ok_or_else(|| Error::decode("unexpected null result"))
    }
}

impl From<Result<Value, ErrorPayload>> for Response {
    fn from(result: Result<Value, ErrorPayload>) -> Self {
        Self { result }
    }
}
