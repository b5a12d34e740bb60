//! Call factory trait and lifecycle
//!
//! A call factory captures the arguments of one RPC method, produces the
//! [`Request`] for it, and later maps the matching [`Response`] onto a
//! caller-owned destination. A batch dispatcher drives the two steps in
//! fixed order: [`CallFactory::create_request`] then
//! [`CallFactory::handle_response`].

use std::fmt;

use derive_more::Display;
use tracing::trace;

use crate::{Error, Request, Response};

/// Core trait for a typed RPC call
pub trait CallFactory: fmt::Debug + Send {
    /// Build the wire request from the captured arguments
    ///
    /// Fails with [`Error::ArgumentEncoding`] when the arguments cannot be
    /// represented on the wire. No request is produced in that case.
    fn create_request(&mut self) -> Result<Request, Error>;

    /// Map the transport's response onto the caller's destination
    ///
    /// A JSON-RPC error in `response` is returned as-is. The destination is
    /// only written once the whole response decoded successfully.
    fn handle_response(&mut self, response: Response) -> Result<(), Error>;
}

/// Lifecycle state of a single call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum CallState {
    /// Constructed, no request produced yet
    #[default]
    #[display("pending")]
    Pending,
    /// Request produced, waiting for the response
    #[display("requested")]
    Requested,
    /// Response handled, or the call failed
    #[display("done")]
    Done,
}

impl CallState {
    /// Run the request step, moving `Pending -> Requested` on success
    ///
    /// A failed build terminates the call.
    pub fn request<F>(&mut self, method: &'static str, build: F) -> Result<Request, Error>
    where
        F: FnOnce() -> Result<Request, Error>,
    {
        if *self != Self::Pending {
            return Err(Error::InvalidState {
                operation: "create request",
                state: *self,
            });
        }
        let request = build();
        *self = if request.is_ok() {
            Self::Requested
        } else {
            Self::Done
        };
        trace!(method, state = %self, "Request step finished");
        request
    }

    /// Run the response step, moving `Requested -> Done`
    pub fn respond<F>(&mut self, method: &'static str, handle: F) -> Result<(), Error>
    where
        F: FnOnce() -> Result<(), Error>,
    {
        if *self != Self::Requested {
            return Err(Error::InvalidState {
                operation: "handle response",
                state: *self,
            });
        }
        *self = Self::Done;
        let result = handle();
        trace!(method, ok = result.is_ok(), "Response step finished");
        result
    }
}
