//! Test doubles shared by the export integration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use fluxpub_export::{Asset, AssetFetcher, FetchError};

/// Serves canned bodies by URL; anything else is a 404.
#[derive(Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &[u8]) -> Self {
        self.bodies.insert(url.to_string(), body.to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Asset, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.bodies.get(url) {
            Some(body) => Ok(Asset::from_url(url, body.clone())),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
