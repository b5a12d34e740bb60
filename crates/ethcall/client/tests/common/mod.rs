//! Common test utilities

use std::{fmt, sync::Mutex};

use async_trait::async_trait;
use nexum_ethcall_client::{BatchTransport, Request, Response, TransportError};

type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Mock transport answering every request through a handler
pub struct MockTransport {
    handler: Handler,
    /// Batches that were sent, in order
    pub batches: Mutex<Vec<Vec<Request>>>,
    /// Fail every batch with this message
    pub failure: Option<String>,
    /// Drop the last response of each batch
    pub truncate: bool,
}

impl MockTransport {
    /// Create a mock transport answering with `handler`
    pub fn new(handler: impl Fn(&Request) -> Response + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            batches: Mutex::new(Vec::new()),
            failure: None,
            truncate: false,
        }
    }

    /// Create a mock transport whose batches all fail
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(|_| Response::success(serde_json::Value::Null))
        }
    }

    /// Batches that were sent, in order
    pub fn sent(&self) -> Vec<Vec<Request>> {
        self.batches.lock().unwrap().clone()
    }
}

impl fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTransport")
            .field("batches", &self.batches)
            .field("failure", &self.failure)
            .field("truncate", &self.truncate)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BatchTransport for MockTransport {
    async fn batch_call(&self, requests: &[Request]) -> Result<Vec<Response>, TransportError> {
        self.batches.lock().unwrap().push(requests.to_vec());

        if let Some(message) = &self.failure {
            return Err(TransportError::message(message.clone()));
        }

        let mut responses: Vec<Response> = requests.iter().map(|request| (self.handler)(request)).collect();
        if self.truncate {
            responses.pop();
        }
        Ok(responses)
    }
}
