//! Errors surfaced by the batch dispatcher

use nexum_ethcall_core::Error;

use crate::{config::ConfigError, transport::TransportError};

/// Error type returned by [`Client::call`](crate::Client::call)
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client could not be configured
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A factory could not build its request; nothing was sent
    #[error("request creation failed: {source}")]
    RequestCreation {
        /// Position of the failing call in the batch
        index: usize,
        /// Error reported by the factory
        source: Error,
    },

    /// The batch could not be delivered; no call was handled
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Exactly one call in the batch failed
    #[error("response handling failed: {source}")]
    ResponseHandling {
        /// Position of the failing call in the batch
        index: usize,
        /// Error reported by the factory
        source: Error,
    },

    /// Several calls in the batch failed
    #[error("{0}")]
    Calls(CallErrors),
}

impl ClientError {
    /// The factory error for the call at `index`, if that call failed
    pub fn call_error(&self, index: usize) -> Option<&Error> {
        match self {
            Self::RequestCreation { index: i, source } | Self::ResponseHandling { index: i, source }
                if *i == index =>
            {
                Some(source)
            }
            Self::Calls(errors) => errors.get(index),
            _ => None,
        }
    }
}

/// Per-call outcome of a batch in which more than one call failed
///
/// Holds one slot per call, in batch order; `None` marks a call whose
/// destination was populated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.summary())]
pub struct CallErrors(Vec<Option<Error>>);

impl CallErrors {
    /// Create from per-call outcomes
    pub const fn new(errors: Vec<Option<Error>>) -> Self {
        Self(errors)
    }

    /// Number of calls in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the batch was empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The error of the call at `index`, if it failed
    pub fn get(&self, index: usize) -> Option<&Error> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Failed calls with their batch position
    pub fn failed(&self) -> impl Iterator<Item = (usize, &Error)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, err)| err.as_ref().map(|err| (index, err)))
    }

    fn summary(&self) -> String {
        let failed: Vec<_> = self.failed().collect();
        let mut summary = format!("{} of {} calls failed", failed.len(), self.len());
        for (index, err) in failed {
            summary.push_str(&format!("; call {index}: {err}"));
        }
        summary
    }

    /// Collapse into the dispatcher's result
    pub(crate) fn into_result(self) -> Result<(), ClientError> {
        let failed: Vec<usize> = self.failed().map(|(index, _)| index).collect();
        match failed.as_slice() {
            [] => Ok(()),
            [index] => match self.0.into_iter().nth(*index).flatten() {
                Some(source) => Err(ClientError::ResponseHandling {
                    index: *index,
                    source,
                }),
                None => Ok(()),
            },
            _ => Err(ClientError::Calls(self)),
        }
    }
}

impl Default for CallErrors {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
