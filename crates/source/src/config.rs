//! Connection settings for the Miniflux API.

use std::fmt;

/// Where the server lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: String,
    pub api_key: String,
}

impl SourceConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Base URL without trailing slashes or a trailing `/v1` API prefix.
    ///
    /// Users commonly paste either `https://host` or `https://host/v1`.
    pub fn normalized_base_url(&self) -> &str {
        let mut base = self.base_url.trim().trim_end_matches('/');
        if let Some(stripped) = base.strip_suffix("/v1") {
            base = stripped.trim_end_matches('/');
        }
        base
    }
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
