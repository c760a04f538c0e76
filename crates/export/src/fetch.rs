//! HTTP implementation of [`AssetFetcher`].

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::traits::AssetFetcher;
use crate::types::Asset;

/// Fetches images over HTTP with a single reused client.
///
/// No retries and no size limit; a failed request simply yields an error.
#[derive(Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::Client,
}

impl Default for HttpAssetFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpAssetFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<Asset, FetchError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FetchError::UnsupportedUrl {
                url: url.to_string(),
            });
        }

        tracing::debug!("Fetching image: {}", url);

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport)? {
            bytes.extend_from_slice(&chunk);
        }

        let asset = Asset::from_url(url, bytes);
        tracing::debug!("Fetched {} ({} bytes) as {}", url, asset.bytes.len(), asset.name);
        Ok(asset)
    }
}
