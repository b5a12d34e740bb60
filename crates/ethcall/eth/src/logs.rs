//! `eth_getLogs`

use nexum_ethcall_core::prelude::*;

use crate::{filter::FilterQuery, log::Log};

const METHOD: &str = "eth_getLogs";

/// Requests the logs matching a [`FilterQuery`]
#[derive(Debug)]
pub struct Logs<'a> {
    query: FilterQuery,
    returns: Option<&'a mut Vec<Log>>,
    state: CallState,
}

impl<'a> Logs<'a> {
    /// Create the call for `query`
    pub fn new(query: FilterQuery) -> Self {
        Self {
            query,
            returns: None,
            state: CallState::default(),
        }
    }

    /// Write the matching logs into `logs` on success
    pub fn returns(mut self, logs: &'a mut Vec<Log>) -> Self {
        self.returns = Some(logs);
        self
    }

    /// The captured filter
    pub const fn query(&self) -> &FilterQuery {
        &self.query
    }
}

impl CallFactory for Logs<'_> {
    fn create_request(&mut self) -> Result<Request, Error> {
        let query = &self.query;
        self.state.request(METHOD, || {
            Ok(Request::with_params(METHOD, vec![query.to_filter_arg()?]))
        })
    }

    fn handle_response(&mut self, response: Response) -> Result<(), Error> {
        let returns = &mut self.returns;
        self.state.respond(METHOD, || {
            let result: Vec<Log> = response.decode_optional()?.unwrap_or_default();
            if let Some(logs) = returns.as_deref_mut() {
                *logs = result;
            }
            Ok(())
        })
    }
}
