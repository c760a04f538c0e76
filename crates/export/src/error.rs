//! Error types for export operations.

use thiserror::Error;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error types for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A CSS selector failed to compile.
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Markup could not be built or parsed as expected.
    #[error("Markup error: {message}")]
    Markup { message: String },

    /// Two chapters would share one file inside the container.
    #[error("Duplicate chapter file name: {file_name}")]
    DuplicateChapter { file_name: String },

    /// Two assets would share one file inside the container.
    #[error("Duplicate asset name: {name}")]
    DuplicateAsset { name: String },

    /// The book references something it does not contain.
    #[error("Invalid book: {message}")]
    InvalidBook { message: String },

    /// The EPUB container could not be produced.
    #[error("EPUB error: {message}")]
    Epub { message: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to retrieve a single remote asset.
///
/// These are recovered from: the element referencing the asset is dropped.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Connection, timeout or body read failure.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The URL cannot be fetched at all.
    #[error("Unsupported URL: {url}")]
    UnsupportedUrl { url: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::UnsupportedUrl { url } => url,
        }
    }
}
