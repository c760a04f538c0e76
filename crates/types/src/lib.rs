//! Shared data model for fluxpub.
//!
//! These types mirror the subset of the Miniflux entry payload that the
//! conversion pipeline needs.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Author shown when an entry does not name one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Identifier of an entry, unique within one Miniflux server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The feed an entry was published in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: u64,
    pub title: String,
}

/// One article from the feed reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,
    /// Raw HTML body. Listings may omit it, in which case it has to be
    /// fetched separately.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub feed: Option<Feed>,
}

impl Entry {
    /// Create an entry with only the mandatory fields set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: EntryId(id),
            title: title.into(),
            author: None,
            published_at: None,
            content: None,
            url: None,
            feed: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_feed(mut self, feed: Feed) -> Self {
        self.feed = Some(feed);
        self
    }

    /// Author name, falling back to [`UNKNOWN_AUTHOR`] for missing or blank values.
    pub fn author_or_default(&self) -> &str {
        match self.author.as_deref().map(str::trim) {
            Some(author) if !author.is_empty() => author,
            _ => UNKNOWN_AUTHOR,
        }
    }

    /// Whether the body is missing and must be fetched before conversion.
    pub fn needs_content(&self) -> bool {
        self.content
            .as_deref()
            .is_none_or(|content| content.trim().is_empty())
    }

    pub fn feed_title(&self) -> Option<&str> {
        self.feed
            .as_ref()
            .map(|feed| feed.title.as_str())
            .filter(|title| !title.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_defaults_to_unknown() {
        let entry = Entry::new(1, "Title");
        assert_eq!(entry.author_or_default(), "Unknown");

        let entry = Entry::new(1, "Title").with_author("   ");
        assert_eq!(entry.author_or_default(), "Unknown");

        let entry = Entry::new(1, "Title").with_author("Ada");
        assert_eq!(entry.author_or_default(), "Ada");
    }

    #[test]
    fn test_needs_content() {
        assert!(Entry::new(1, "a").needs_content());
        assert!(Entry::new(1, "a").with_content("  ").needs_content());
        assert!(!Entry::new(1, "a").with_content("<p>x</p>").needs_content());
    }

    #[test]
    fn test_deserialize_miniflux_entry() {
        let json = r#"{
            "id": 42,
            "title": "Hello",
            "author": "",
            "published_at": "2024-03-01T10:00:00+01:00",
            "content": "<p>Body</p>",
            "url": "https://example.com/hello",
            "status": "unread",
            "feed": { "id": 7, "title": "Example Feed", "site_url": "https://example.com" }
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, EntryId(42));
        assert_eq!(entry.author_or_default(), "Unknown");
        assert_eq!(entry.feed_title(), Some("Example Feed"));
        assert!(entry.published_at.is_some());
        assert!(!entry.needs_content());
    }
}
