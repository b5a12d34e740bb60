//! JSON-RPC over HTTP using `jsonrpsee`

use async_trait::async_trait;
use jsonrpsee::{
    core::{
        client::ClientT,
        params::{ArrayParams, BatchRequestBuilder},
    },
    http_client::{HttpClient, HttpClientBuilder},
    types::ErrorObject,
};
use nexum_ethcall_core::{ErrorPayload, Request, Response};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    config::ClientConfig,
    error::ClientError,
    transport::{BatchTransport, TransportError},
};

/// Batch transport backed by a `jsonrpsee` HTTP client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    url: Url,
    client: HttpClient,
}

impl HttpTransport {
    /// Create a transport for `url` with default settings
    pub fn new(url: Url) -> Result<Self, TransportError> {
        Self::build(url, HttpClientBuilder::default())
    }

    /// Create a transport from a validated [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let builder = HttpClientBuilder::default()
            .request_timeout(config.request_timeout())
            .max_concurrent_requests(config.max_concurrent_requests);
        Ok(Self::build(config.rpc_url()?, builder)?)
    }

    fn build(url: Url, builder: HttpClientBuilder) -> Result<Self, TransportError> {
        let client = builder.build(url.as_str())?;
        Ok(Self { url, client })
    }

    /// The node endpoint
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl BatchTransport for HttpTransport {
    #[instrument(skip_all, fields(url = %self.url, requests = requests.len()))]
    async fn batch_call(&self, requests: &[Request]) -> Result<Vec<Response>, TransportError> {
        let mut batch = BatchRequestBuilder::new();
        for request in requests {
            let mut params = ArrayParams::new();
            for param in request.params() {
                params.insert(param)?;
            }
            batch.insert(request.method(), params)?;
        }

        let response = self.client.batch_request::<Value>(batch).await?;
        debug!(
            successful = response.num_successful_calls(),
            failed = response.num_failed_calls(),
            "Batch completed"
        );

        let responses: Vec<Response> = response
            .into_iter()
            .map(|entry| Response::from(entry.map_err(|err| error_payload(&err))))
            .collect();
        if responses.len() != requests.len() {
            return Err(TransportError::ResponseCount {
                expected: requests.len(),
                actual: responses.len(),
            });
        }
        Ok(responses)
    }
}

fn error_payload(err: &ErrorObject<'_>) -> ErrorPayload {
    let payload = ErrorPayload::new(i64::from(err.code()), err.message());
    match err.data().and_then(|data| serde_json::from_str(data.get()).ok()) {
        Some(data) => payload.with_data(data),
        None => payload,
    }
}
