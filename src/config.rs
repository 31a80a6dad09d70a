//! Pinning-backend configuration.
//!
//! Credentials are read once at startup and injected into the uploader at
//! construction. There is no runtime reconfiguration.

use std::env;

use crate::error::ConfigError;
use crate::network::{DEFAULT_GATEWAY_URL, DEFAULT_PIN_API_URL};

const ENV_API_URL: &str = "PINATA_API_URL";
const ENV_API_KEY: &str = "PINATA_API_KEY";
const ENV_API_SECRET: &str = "PINATA_API_SECRET";
const ENV_GATEWAY: &str = "PINATA_GATEWAY";

/// Configuration for the pinning backend.
#[derive(Debug, Clone)]
pub struct PinningConfig {
    /// Upload endpoint URL.
    pub api_url: String,
    /// Backend API key, sent as the `pinata_api_key` header.
    pub api_key: String,
    /// Backend API secret, sent as the `pinata_secret_api_key` header.
    pub api_secret: String,
    /// Gateway prefix prepended to returned content identifiers.
    /// When `None`, the raw identifier is used as the content address.
    pub gateway_url: Option<String>,
}

impl PinningConfig {
    /// Config pointing at the default endpoint and gateway.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_PIN_API_URL.to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            gateway_url: Some(DEFAULT_GATEWAY_URL.to_string()),
        }
    }

    /// Read the config from the process environment.
    ///
    /// `PINATA_API_KEY` and `PINATA_API_SECRET` are required; `PINATA_API_URL`
    /// and `PINATA_GATEWAY` fall back to the public Pinata endpoints.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingVar(ENV_API_KEY))?;
        let api_secret =
            env::var(ENV_API_SECRET).map_err(|_| ConfigError::MissingVar(ENV_API_SECRET))?;

        Ok(Self {
            api_url: env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_PIN_API_URL.to_string()),
            api_key,
            api_secret,
            gateway_url: Some(
                env::var(ENV_GATEWAY).unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            ),
        })
    }

    /// Use the raw content identifier as the address, with no gateway prefix.
    pub fn without_gateway(mut self) -> Self {
        self.gateway_url = None;
        self
    }
}
