//! Client configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `ETHCALL_*` environment variables.

use std::{path::Path, time::Duration};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Prefix of the environment variables read by [`ClientConfig::load`]
pub const ENV_PREFIX: &str = "ETHCALL_";

/// Default node endpoint
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Default largest number of calls per batch
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Errors raised while loading or validating a [`ClientConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A provider could not be read or extracted
    #[error("failed to load config: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// `rpc_url` is not a valid URL
    #[error("invalid rpc url {url:?}: {source}")]
    InvalidUrl {
        /// The rejected value
        url: String,
        /// Parser error
        source: url::ParseError,
    },

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Settings of the batch [`Client`](crate::Client) and its HTTP transport
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Node endpoint
    pub rpc_url: String,
    /// Timeout of one batch round trip, in seconds
    pub request_timeout_secs: u64,
    /// Largest number of calls sent in one batch; larger batches are split
    pub max_batch_size: usize,
    /// Maximum number of in-flight HTTP requests
    pub max_concurrent_requests: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            request_timeout_secs: 30,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_concurrent_requests: 16,
        }
    }
}

impl ClientConfig {
    /// Load from defaults, the optional TOML file at `path` and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract and validate from an arbitrary figment
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Set the node endpoint
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    /// Set the batch timeout in seconds
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the largest batch size
    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size;
        self
    }

    /// Set the maximum number of in-flight HTTP requests
    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rpc_url()?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be greater than 0"));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::Invalid("max_batch_size must be greater than 0"));
        }
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_requests must be greater than 0",
            ));
        }
        Ok(())
    }

    /// The parsed node endpoint
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.rpc_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.rpc_url.clone(),
            source,
        })
    }

    /// Timeout of one batch round trip
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
