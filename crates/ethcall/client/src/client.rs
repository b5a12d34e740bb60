//! Batch dispatcher for call factories

use nexum_ethcall_core::{CallFactory, Request};
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::{
    config::{ClientConfig, DEFAULT_MAX_BATCH_SIZE},
    error::{CallErrors, ClientError},
    http::HttpTransport,
    transport::{BatchTransport, TransportError},
};

/// Sends the requests of many call factories in one round trip and hands
/// each factory its own response
///
/// Calls larger than the configured batch size are split into several
/// batches, sent in order.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
    max_batch_size: usize,
}

impl Client<HttpTransport> {
    /// Create a client for `url` with default settings
    pub fn new(url: Url) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::new(url)?))
    }

    /// Create an HTTP client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::from_config(config)?)
            .with_max_batch_size(config.max_batch_size))
    }
}

impl<T: BatchTransport> Client<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }

    /// Cap the number of calls per batch
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size.max(1);
        self
    }

    /// The underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `calls` as one logical batch
    ///
    /// Every factory builds its request first; if any of them fails, nothing
    /// is sent. Otherwise each response is handed to the factory that
    /// produced the matching request, in order. A failing call does not stop
    /// the others from populating their destinations.
    #[instrument(skip_all, fields(calls = calls.len()))]
    pub async fn call(&self, calls: &mut [&mut dyn CallFactory]) -> Result<(), ClientError> {
        if calls.is_empty() {
            return Ok(());
        }

        let requests = calls
            .iter_mut()
            .enumerate()
            .map(|(index, call)| {
                call.create_request()
                    .map_err(|source| ClientError::RequestCreation { index, source })
            })
            .collect::<Result<Vec<Request>, _>>()?;
        for request in &requests {
            trace!(%request, "Queued");
        }

        let mut responses = Vec::with_capacity(requests.len());
        for chunk in requests.chunks(self.max_batch_size) {
            let batch = self.transport.batch_call(chunk).await?;
            if batch.len() != chunk.len() {
                return Err(TransportError::ResponseCount {
                    expected: chunk.len(),
                    actual: batch.len(),
                }
                .into());
            }
            responses.extend(batch);
        }

        let errors: Vec<_> = calls
            .iter_mut()
            .zip(responses)
            .enumerate()
            .map(|(index, (call, response))| {
                call.handle_response(response)
                    .inspect_err(|err| warn!(index, %err, "Call failed"))
                    .err()
            })
            .collect();

        let failed = errors.iter().flatten().count();
        debug!(failed, "Batch handled");
        CallErrors::new(errors).into_result()
    }
}
