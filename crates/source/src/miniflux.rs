//! Miniflux REST API client.

use async_trait::async_trait;
use fluxpub_types::{Entry, EntryId};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::traits::EntrySource;

const AUTH_HEADER: &str = "X-Auth-Token";

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    #[allow(dead_code)]
    total: u64,
    #[serde(default)]
    entries: Option<Vec<Entry>>,
}

/// [`EntrySource`] backed by a Miniflux server.
pub struct MinifluxClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MinifluxClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fluxpub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SourceError::Http {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self::with_client(config, client))
    }

    /// Build a client around an existing reqwest client.
    pub fn with_client(config: &SourceConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// URL listing unread entries, oldest first.
    pub fn unread_url(&self, limit: Option<usize>) -> Result<Url> {
        let mut url = self.endpoint("v1/entries")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("status", "unread")
                .append_pair("order", "published_at")
                .append_pair("direction", "asc");
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    pub fn entry_url(&self, id: EntryId) -> Result<Url> {
        self.endpoint(&format!("v1/entries/{}", id))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| SourceError::InvalidUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("Fetching {}", url);

        let url_str = url.to_string();
        let response = self
            .client
            .get(url)
            .header(AUTH_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(url_str, status));
        }

        let body = response.bytes().await.map_err(|source| SourceError::Http {
            url: url_str.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| SourceError::Decode {
            url: url_str,
            source,
        })
    }
}

fn status_error(url: String, status: StatusCode) -> SourceError {
    match status {
        StatusCode::NOT_FOUND => SourceError::NotFound { url },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SourceError::Unauthorized {
            url,
            status: status.as_u16(),
        },
        _ => SourceError::Status {
            url,
            status: status.as_u16(),
        },
    }
}

#[async_trait]
impl EntrySource for MinifluxClient {
    async fn list_unread(&self, limit: Option<usize>) -> Result<Vec<Entry>> {
        let url = self.unread_url(limit)?;
        let response: EntriesResponse = self.get_json(url).await?;

        let mut entries = response.entries.unwrap_or_default();
        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        tracing::info!("Listed {} unread entries", entries.len());
        Ok(entries)
    }

    async fn fetch_full(&self, id: EntryId) -> Result<Entry> {
        let url = self.entry_url(id)?;
        self.get_json(url).await
    }
}
