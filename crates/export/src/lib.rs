//! fluxpub export - turns feed entries into EPUB books.
//!
//! The pipeline is: [`ContentRewriter`] sanitizes an entry's markup and
//! embeds its images through an [`AssetFetcher`], the assembler functions
//! wrap the result in a [`Book`], and [`EpubWriter`] serializes it.

pub mod assemble;
pub mod book;
pub mod error;
pub mod fetch;
pub mod resolve;
pub mod rewrite;
pub mod traits;
pub mod types;

pub mod converters;
pub mod formats;

// Re-export main types
pub use assemble::{CombinedBook, chapter_body, single_entry_book};
pub use book::{Book, Chapter, SpineItem, TocEntry};
pub use error::{ExportError, FetchError, Result};
pub use fetch::HttpAssetFetcher;
pub use resolve::{MediaCandidate, first_srcset_url, resolve_media};
pub use rewrite::ContentRewriter;
pub use traits::AssetFetcher;
pub use types::{
    Asset, DataUrlPolicy, RewriteOptions, RewriteReport, RewrittenContent, extension_from_url,
};

// Re-export writers
pub use formats::{EPUB_MIME_TYPE, EpubWriter};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
