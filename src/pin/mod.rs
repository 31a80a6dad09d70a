//! Pinning backend — turns a blob into a durable, dereferenceable
//! content address.
//!
//! One outbound call per invocation, no retry, no local caching: repeated
//! uploads of identical content hit the backend again and may or may not
//! deduplicate depending on its policy.

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::config::PinningConfig;
use crate::error::UploadError;
use crate::shared::ContentAddress;

/// Durable blob storage keyed by content address.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store `bytes` and return the address under which they are retrievable.
    async fn store(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<ContentAddress, UploadError>;
}

/// Wire shape of a successful pin response.
#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Pinata-style pinning client.
///
/// Timeouts are whatever the underlying HTTP client enforces; this layer
/// does not add its own.
pub struct PinataClient {
    http: Client,
    config: PinningConfig,
}

impl PinataClient {
    pub fn new(config: PinningConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn address_for(&self, identifier: String) -> ContentAddress {
        match &self.config.gateway_url {
            Some(gateway) => {
                ContentAddress::new(format!("{}/{}", gateway.trim_end_matches('/'), identifier))
            }
            None => ContentAddress::new(identifier),
        }
    }
}

#[async_trait]
impl AssetStore for PinataClient {
    async fn store(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<ContentAddress, UploadError> {
        let size = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&self.config.api_url)
            .header("pinata_api_key", &self.config.api_key)
            .header("pinata_secret_api_key", &self.config.api_secret)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Backend {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let pinned = response.json::<PinResponse>().await?;
        tracing::debug!(file_name, size, identifier = %pinned.ipfs_hash, "pinned blob");

        Ok(self.address_for(pinned.ipfs_hash))
    }
}
