//! Export format implementations.

pub mod epub;

// Re-export writers
pub use epub::{EPUB_MIME_TYPE, EpubWriter};
