//! Core trait for entry sources.

use async_trait::async_trait;
use fluxpub_types::{Entry, EntryId};

use crate::error::Result;

/// A place unread entries can be listed and fetched from.
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// List unread entries in the order the server returns them.
    ///
    /// When `limit` is set, at most that many entries are returned and they
    /// are always the first ones of the listing.
    async fn list_unread(&self, limit: Option<usize>) -> Result<Vec<Entry>>;

    /// Fetch a single entry including its body.
    async fn fetch_full(&self, id: EntryId) -> Result<Entry>;
}
