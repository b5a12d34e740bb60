//! `eth_getTransactionReceipt`

use alloy_primitives::B256;
use nexum_ethcall_core::prelude::*;
use tracing::debug;

use crate::receipt::{RawReceipt, Receipt};

const METHOD: &str = "eth_getTransactionReceipt";

/// Where a decoded receipt is written
#[derive(Debug)]
pub enum ReceiptDestination<'a> {
    /// Native receipt with plain integers and a typed status
    Native(&'a mut Receipt),
    /// Wire-shaped receipt with hex quantities kept as-is
    Raw(&'a mut RawReceipt),
}

/// Requests the receipt of a transaction
///
/// A `null` answer means the transaction is unknown or pending and fails
/// with [`ProtocolError::NotFound`] in both destination modes.
#[derive(Debug)]
pub struct TransactionReceipt<'a> {
    hash: B256,
    returns: Option<ReceiptDestination<'a>>,
    state: CallState,
}

impl<'a> TransactionReceipt<'a> {
    /// Create the call for the transaction `hash`
    pub fn new(hash: B256) -> Self {
        Self {
            hash,
            returns: None,
            state: CallState::default(),
        }
    }

    /// Write the native receipt into `receipt` on success
    ///
    /// Replaces any destination set by [`Self::returns_raw`].
    pub fn returns(mut self, receipt: &'a mut Receipt) -> Self {
        self.returns = Some(ReceiptDestination::Native(receipt));
        self
    }

    /// Write the wire-shaped receipt into `receipt` on success
    ///
    /// Replaces any destination set by [`Self::returns`].
    pub fn returns_raw(mut self, receipt: &'a mut RawReceipt) -> Self {
        self.returns = Some(ReceiptDestination::Raw(receipt));
        self
    }

    /// The requested transaction hash
    pub const fn hash(&self) -> B256 {
        self.hash
    }
}

impl CallFactory for TransactionReceipt<'_> {
    fn create_request(&mut self) -> Result<Request, Error> {
        let hash = self.hash;
        self.state
            .request(METHOD, || Request::with_param(METHOD, hash))
    }

    fn handle_response(&mut self, response: Response) -> Result<(), Error> {
        let hash = self.hash;
        let returns = &mut self.returns;
        self.state.respond(METHOD, || {
            let Some(raw) = response.decode_optional::<RawReceipt>()? else {
                debug!(%hash, "Transaction receipt not found");
                return Err(Error::not_found());
            };

            match returns {
                Some(ReceiptDestination::Native(receipt)) => **receipt = Receipt::try_from(raw)?,
                Some(ReceiptDestination::Raw(receipt)) => **receipt = raw,
                None => {
                    Receipt::try_from(raw)?;
                }
            }
            Ok(())
        })
    }
}
