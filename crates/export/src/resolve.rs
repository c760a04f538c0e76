//! Picks the single image URL behind an `<img>`, `<picture>` or `<figure>`.

use ego_tree::NodeId;
use scraper::ElementRef;

/// Shape of an embeddable media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Picture,
    Figure,
}

impl MediaKind {
    fn of(element: &ElementRef<'_>) -> Option<Self> {
        match element.value().name() {
            "img" => Some(MediaKind::Image),
            "picture" => Some(MediaKind::Picture),
            "figure" => Some(MediaKind::Figure),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Picture => "picture",
            MediaKind::Figure => "figure",
        }
    }
}

/// The URL chosen for a media element and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCandidate {
    pub url: String,
    /// Element carrying the URL: the `<img>` itself or a nested `<img>`/`<source>`.
    pub target: NodeId,
    /// Attribute on `target` holding the URL, `src` or `srcset`.
    pub attribute: &'static str,
}

impl MediaCandidate {
    pub fn is_data_url(&self) -> bool {
        is_data_url(&self.url)
    }
}

/// Resolve the best source URL for `element`.
///
/// Returns `None` when the element is not a media element or carries no
/// usable URL; callers drop such elements without fetching anything.
pub fn resolve_media(element: ElementRef<'_>) -> Option<MediaCandidate> {
    match MediaKind::of(&element)? {
        MediaKind::Image => resolve_image(element),
        MediaKind::Picture | MediaKind::Figure => resolve_grouping(element),
    }
}

fn resolve_image(element: ElementRef<'_>) -> Option<MediaCandidate> {
    let src = element.value().attr("src")?.trim();
    if src.is_empty() {
        return None;
    }

    Some(MediaCandidate {
        url: src.to_string(),
        target: element.id(),
        attribute: "src",
    })
}

/// Nested `<img src>` first, then the first URL of the first `<source srcset>`.
///
/// Media inside a `<figcaption>` belongs to the caption, not the grouping.
fn resolve_grouping(element: ElementRef<'_>) -> Option<MediaCandidate> {
    let nested = |tag: &'static str| {
        element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |child| child.value().name() == tag && !in_caption(child, &element))
    };

    if let Some(candidate) = nested("img").find_map(resolve_image) {
        return Some(candidate);
    }

    nested("source").find_map(|source| {
        let url = first_srcset_url(source.value().attr("srcset")?)?;
        Some(MediaCandidate {
            url: url.to_string(),
            target: source.id(),
            attribute: "srcset",
        })
    })
}

/// Whether `node` sits inside a `<figcaption>` below `grouping`.
pub(crate) fn in_caption(node: &ElementRef<'_>, grouping: &ElementRef<'_>) -> bool {
    node.ancestors()
        .take_while(|ancestor| ancestor.id() != grouping.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "figcaption")
}

/// First URL of a responsive `srcset` list, ignoring width/density descriptors.
///
/// The URL runs up to the first whitespace with trailing commas removed, so
/// commas inside `data:` URLs are kept.
pub fn first_srcset_url(srcset: &str) -> Option<&str> {
    let url = srcset.split_whitespace().next()?.trim_end_matches(',');
    (!url.is_empty()).then_some(url)
}

pub fn is_data_url(url: &str) -> bool {
    url.get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}
