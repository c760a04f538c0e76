//! fluxpub source - access to unread entries on a Miniflux server.

pub mod config;
pub mod error;
pub mod miniflux;
pub mod traits;

pub use config::SourceConfig;
pub use error::{Result, SourceError};
pub use miniflux::MinifluxClient;
pub use traits::EntrySource;

pub use fluxpub_types::{Entry, EntryId, Feed};
