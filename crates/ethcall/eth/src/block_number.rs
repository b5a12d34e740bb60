//! `eth_blockNumber`

use alloy_primitives::U256;
use nexum_ethcall_core::prelude::*;

const METHOD: &str = "eth_blockNumber";

/// Requests the number of the most recent block
#[derive(Debug, Default)]
pub struct BlockNumber<'a> {
    returns: Option<&'a mut U256>,
    state: CallState,
}

impl<'a> BlockNumber<'a> {
    /// Create the call
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the block number into `block_number` on success
    pub fn returns(mut self, block_number: &'a mut U256) -> Self {
        self.returns = Some(block_number);
        self
    }
}

impl CallFactory for BlockNumber<'_> {
    fn create_request(&mut self) -> Result<Request, Error> {
        self.state.request(METHOD, || Ok(Request::new(METHOD)))
    }

    fn handle_response(&mut self, response: Response) -> Result<(), Error> {
        let returns = &mut self.returns;
        self.state.respond(METHOD, || {
            let result: HexU256 = response.decode()?;
            if let Some(block_number) = returns.as_deref_mut() {
                *block_number = result.0;
            }
            Ok(())
        })
    }
}
