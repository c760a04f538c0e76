//! Core trait for retrieving remote assets.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::Asset;

/// Retrieves the bytes behind an image URL and wraps them as an [`Asset`].
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch `url`. Every call yields a freshly named asset, even for
    /// repeated URLs.
    async fn fetch(&self, url: &str) -> Result<Asset, FetchError>;
}
