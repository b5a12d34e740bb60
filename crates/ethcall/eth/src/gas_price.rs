//! `eth_gasPrice`

use alloy_primitives::U256;
use nexum_ethcall_core::prelude::*;

const METHOD: &str = "eth_gasPrice";

/// Requests the current gas price in wei
#[derive(Debug, Default)]
pub struct GasPrice<'a> {
    returns: Option<&'a mut U256>,
    state: CallState,
}

impl<'a> GasPrice<'a> {
    /// Create the call
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the gas price into `gas_price` on success
    pub fn returns(mut self, gas_price: &'a mut U256) -> Self {
        self.returns = Some(gas_price);
        self
    }
}

impl CallFactory for GasPrice<'_> {
    fn create_request(&mut self) -> Result<Request, Error> {
        self.state.request(METHOD, || Ok(Request::new(METHOD)))
    }

    fn handle_response(&mut self, response: Response) -> Result<(), Error> {
        let returns = &mut self.returns;
        self.state.respond(METHOD, || {
            let result: HexU256 = response.decode()?;
            if let Some(gas_price) = returns.as_deref_mut() {
                *gas_price = result.0;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_request() {
        let req = GasPrice::new().create_request().unwrap();
        assert_eq!(req.method(), "eth_gasPrice");
        assert!(req.params().is_empty());
    }

    #[test]
    fn test_one_gwei() {
        let mut gas_price = U256::ZERO;
        let mut call = GasPrice::new().returns(&mut gas_price);
        call.create_request().unwrap();
        call.handle_response(Response::success(json!("0x3b9aca00")))
            .unwrap();
        drop(call);
        assert_eq!(gas_price, U256::from(1_000_000_000u64));
    }

    #[test]
    fn test_null_is_a_decode_error() {
        let mut gas_price = U256::from(5u64);
        let mut call = GasPrice::new().returns(&mut gas_price);
        call.create_request().unwrap();
        assert!(matches!(
            call.handle_response(Response::success(Value::Null)),
            Err(Error::Decode(_))
        ));
        drop(call);
        assert_eq!(gas_price, U256::from(5u64));
    }

    #[test]
    fn test_second_response_is_rejected() {
        let mut call = GasPrice::new();
        call.create_request().unwrap();
        call.handle_response(Response::success(json!("0x1"))).unwrap();
        assert!(matches!(
            call.handle_response(Response::success(json!("0x2"))),
            Err(Error::InvalidState { .. })
        ));
    }
}
