//! Core types for export operations.

use url::Url;
use uuid::Uuid;

/// Extension used when a URL does not carry one.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpeg";

/// A binary resource embedded in the book.
#[derive(Clone, PartialEq, Eq)]
pub struct Asset {
    /// File name inside the container, `img_<id>.<ext>`.
    pub name: String,
    /// MIME type implied by the extension.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Asset {
    /// Create an asset for content fetched from `url`, with a fresh unique name.
    pub fn from_url(url: &str, bytes: Vec<u8>) -> Self {
        let extension = extension_from_url(url);
        Self {
            name: asset_name(&extension),
            media_type: media_type_for_extension(&extension),
            bytes,
        }
    }

    pub fn extension(&self) -> &str {
        self.name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
    }
}

impl std::fmt::Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asset")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Generate a globally unique asset name with the given extension.
pub fn asset_name(extension: &str) -> String {
    format!("img_{}.{}", Uuid::new_v4().simple(), extension)
}

/// Extension of the last path segment of `url`, lower-cased.
///
/// Query strings and fragments are ignored. Falls back to
/// [`DEFAULT_IMAGE_EXTENSION`] when the segment has no usable suffix.
pub fn extension_from_url(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let segment = path.rsplit('/').next().unwrap_or_default();
    match segment.rsplit_once('.') {
        Some((_, ext))
            if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => DEFAULT_IMAGE_EXTENSION.to_string(),
    }
}

/// MIME type for an image file extension.
///
/// Extensions that do not name an image type fall back to JPEG, matching
/// [`DEFAULT_IMAGE_EXTENSION`].
pub fn media_type_for_extension(extension: &str) -> String {
    mime_guess::from_ext(extension)
        .first_raw()
        .filter(|mime| mime.starts_with("image/"))
        .unwrap_or("image/jpeg")
        .to_string()
}

/// How `data:` image URLs are handled. They are never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataUrlPolicy {
    /// Leave the element and its inline data untouched.
    #[default]
    Keep,
    /// Remove the element like an image that failed to load.
    Drop,
}

/// Options for the content rewriter.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    pub data_urls: DataUrlPolicy,
    /// Base for resolving relative and protocol-relative image URLs,
    /// usually the entry's own URL.
    pub base_url: Option<Url>,
}

impl RewriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_urls(mut self, policy: DataUrlPolicy) -> Self {
        self.data_urls = policy;
        self
    }

    /// Use `base` for relative URLs. Unparseable bases are ignored.
    pub fn with_base_url(mut self, base: Option<&str>) -> Self {
        self.base_url = base.and_then(|base| Url::parse(base).ok());
        self
    }
}

/// Tally of what happened to the media elements of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Elements now pointing at an embedded asset.
    pub embedded: usize,
    /// Elements removed because their image could not be fetched.
    pub dropped: usize,
    /// Elements removed because no source URL could be found.
    pub no_candidate: usize,
    /// Elements left alone because they carry inline data.
    pub inline: usize,
}

/// Output of rewriting one entry's markup.
#[derive(Debug, Clone)]
pub struct RewrittenContent {
    /// Sanitized XHTML fragment.
    pub html: String,
    /// Assets referenced by `html`, in document order.
    pub assets: Vec<Asset>,
    pub report: RewriteReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_url() {
        assert_eq!(extension_from_url("https://example.com/a/pic.png"), "png");
        assert_eq!(extension_from_url("https://example.com/a/pic.JPG?w=300#x"), "jpg");
        assert_eq!(extension_from_url("https://example.com/a/image"), "jpeg");
        assert_eq!(extension_from_url("https://example.com/"), "jpeg");
        assert_eq!(extension_from_url("https://example.com/v1.2/image"), "jpeg");
        assert_eq!(extension_from_url("https://example.com/pic."), "jpeg");
        assert_eq!(extension_from_url("/relative/pic.gif?x=1"), "gif");
    }

    #[test]
    fn test_asset_names_are_unique() {
        let a = Asset::from_url("https://example.com/pic.png", vec![1]);
        let b = Asset::from_url("https://example.com/pic.png", vec![1]);
        assert_ne!(a.name, b.name);
        assert!(a.name.starts_with("img_"));
        assert!(a.name.ends_with(".png"));
        assert_eq!(a.extension(), "png");
        assert_eq!(a.media_type, "image/png");
    }

    #[test]
    fn test_media_types() {
        assert_eq!(media_type_for_extension("jpeg"), "image/jpeg");
        assert_eq!(media_type_for_extension("JPG"), "image/jpeg");
        assert_eq!(media_type_for_extension("svg"), "image/svg+xml");
        assert_eq!(media_type_for_extension("webp"), "image/webp");
        assert_eq!(media_type_for_extension("png"), "image/png");
        assert_eq!(media_type_for_extension("php"), "image/jpeg");
        assert_eq!(media_type_for_extension("unknownext"), "image/jpeg");
    }
}
