//! Sanitizes entry markup and embeds its remote images.
//!
//! Media is handled in three passes: `<figure>` groupings, then standalone
//! `<picture>` groupings, then plain `<img>` elements outside both. Each
//! element is resolved to one URL, fetched, and then either rewritten to
//! point at the embedded asset or removed from the tree.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::converters::{escape_attribute, serialize_children};
use crate::error::{ExportError, Result};
use crate::resolve::{MediaCandidate, MediaKind, in_caption, resolve_media};
use crate::traits::AssetFetcher;
use crate::types::{Asset, DataUrlPolicy, RewriteOptions, RewriteReport, RewrittenContent};

/// Elements removed before anything else, together with their subtrees.
const STRIPPED_ELEMENTS: &str = "script, style";

/// Decision for a single media element.
#[derive(Debug)]
pub(crate) enum MediaOutcome {
    /// The image was fetched; the element now points at `asset`.
    Replaced {
        candidate: MediaCandidate,
        asset: Asset,
    },
    /// The fetch failed; the element is removed.
    Dropped,
    /// No URL could be found; the element is removed.
    NoCandidate,
    /// Inline `data:` image kept as the only reference of the element.
    Inline { candidate: MediaCandidate },
}

pub(crate) fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ExportError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Rewrites one entry body at a time using a shared fetcher.
pub struct ContentRewriter<'a> {
    fetcher: &'a dyn AssetFetcher,
    options: RewriteOptions,
}

impl<'a> ContentRewriter<'a> {
    pub fn new(fetcher: &'a dyn AssetFetcher, options: RewriteOptions) -> Self {
        Self { fetcher, options }
    }

    /// Sanitize `html` and embed its images.
    ///
    /// Image failures never fail the rewrite; the affected elements are
    /// dropped and counted in the report.
    pub async fn rewrite(&self, html: &str) -> Result<RewrittenContent> {
        let mut document = Html::parse_fragment(html);
        let stripped = strip_elements(&mut document, &compile(STRIPPED_ELEMENTS)?);
        if stripped > 0 {
            tracing::debug!("Removed {} script/style elements", stripped);
        }

        let mut assets = Vec::new();
        let mut report = RewriteReport::default();

        for kind in [MediaKind::Figure, MediaKind::Picture, MediaKind::Image] {
            for element in pending_media(&document, kind)? {
                let candidate = document
                    .tree
                    .get(element)
                    .and_then(ElementRef::wrap)
                    .and_then(resolve_media);

                match self.decide(candidate).await {
                    MediaOutcome::Replaced { candidate, asset } => {
                        apply_replacement(&mut document, kind, element, &candidate, &asset.name)?;
                        report.embedded += 1;
                        assets.push(asset);
                    }
                    MediaOutcome::Dropped => {
                        detach(&mut document, element);
                        report.dropped += 1;
                    }
                    MediaOutcome::NoCandidate => {
                        tracing::debug!("Removing <{}> without an image source", kind.tag());
                        detach(&mut document, element);
                        report.no_candidate += 1;
                    }
                    MediaOutcome::Inline { candidate } => {
                        // Remote alternatives next to the inline data must not survive.
                        apply_replacement(&mut document, kind, element, &candidate, &candidate.url)?;
                        report.inline += 1;
                    }
                }
            }
        }

        let html = serialize_children(*document.root_element());
        Ok(RewrittenContent {
            html,
            assets,
            report,
        })
    }

    async fn decide(&self, candidate: Option<MediaCandidate>) -> MediaOutcome {
        let Some(candidate) = candidate else {
            return MediaOutcome::NoCandidate;
        };

        if candidate.is_data_url() {
            return match self.options.data_urls {
                DataUrlPolicy::Keep => MediaOutcome::Inline { candidate },
                DataUrlPolicy::Drop => MediaOutcome::Dropped,
            };
        }

        let url = self.absolute_url(&candidate.url);
        match self.fetcher.fetch(&url).await {
            Ok(asset) => MediaOutcome::Replaced { candidate, asset },
            Err(error) => {
                tracing::warn!("Dropping image {}: {}", url, error);
                MediaOutcome::Dropped
            }
        }
    }

    fn absolute_url(&self, url: &str) -> String {
        match &self.options.base_url {
            Some(base) if Url::parse(url).is_err() => base
                .join(url)
                .map(|joined| joined.to_string())
                .unwrap_or_else(|_| url.to_string()),
            _ => url.to_string(),
        }
    }
}

/// Detach every element matching `selector`. Returns how many were removed.
fn strip_elements(document: &mut Html, selector: &Selector) -> usize {
    let ids: Vec<NodeId> = document.select(selector).map(|element| element.id()).collect();
    for id in &ids {
        detach(document, *id);
    }
    ids.len()
}

/// Media elements of `kind` still attached and not owned by an enclosing grouping.
fn pending_media(document: &Html, kind: MediaKind) -> Result<Vec<NodeId>> {
    let selector = compile(kind.tag())?;
    let media = compile("img, source")?;

    let pending: Vec<NodeId> = document
        .select(&selector)
        .filter(|element| match kind {
            // Figures around code listings or quotes are not media groupings.
            MediaKind::Figure => {
                !has_ancestor(element, &["figure"])
                    && element.select(&media).any(|nested| !in_caption(&nested, element))
            }
            MediaKind::Picture | MediaKind::Image => !owned_by_grouping(element),
        })
        .map(|element| element.id())
        .collect();

    Ok(pending)
}

fn has_ancestor(element: &ElementRef<'_>, tags: &[&str]) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| tags.contains(&ancestor.value().name()))
}

/// Whether the nearest enclosing figure, picture or caption is a grouping.
///
/// Media in a `<figcaption>` is handled on its own, not with its figure.
fn owned_by_grouping(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .map(|ancestor| ancestor.value().name())
        .find(|name| matches!(*name, "figcaption" | "figure" | "picture"))
        .is_some_and(|name| name != "figcaption")
}

fn detach(document: &mut Html, id: NodeId) {
    if let Some(mut node) = document.tree.get_mut(id) {
        node.detach();
    }
}

fn apply_replacement(
    document: &mut Html,
    kind: MediaKind,
    element: NodeId,
    candidate: &MediaCandidate,
    asset_name: &str,
) -> Result<()> {
    match kind {
        MediaKind::Figure => replace_figure(document, element, asset_name),
        MediaKind::Picture => {
            set_reference(document, candidate, asset_name)?;
            prune_alternatives(document, element, candidate.target)
        }
        MediaKind::Image => set_reference(document, candidate, asset_name),
    }
}

/// Replace the figure's children with a fresh `<img>` and its caption, if any.
fn replace_figure(document: &mut Html, figure: NodeId, asset_name: &str) -> Result<()> {
    let caption_selector = compile("figcaption")?;
    let image_selector = compile("img")?;

    let Some(figure_ref) = document.tree.get(figure).and_then(ElementRef::wrap) else {
        return Ok(());
    };
    let caption = figure_ref
        .select(&caption_selector)
        .next()
        .map(|caption| caption.id());
    let alt = figure_ref
        .select(&image_selector)
        .filter(|image| !in_caption(image, &figure_ref))
        .find_map(|image| image.value().attr("alt"))
        .unwrap_or_default()
        .to_string();
    let children: Vec<NodeId> = figure_ref.children().map(|child| child.id()).collect();

    let image = build_element(
        "img",
        &[
            ("src".to_string(), asset_name.to_string()),
            ("alt".to_string(), alt),
        ],
    )?;

    for child in children {
        detach(document, child);
    }

    if let Some(mut node) = document.tree.get_mut(figure) {
        node.append(image);
        if let Some(caption) = caption {
            node.append_id(caption);
        }
    }

    Ok(())
}

/// Point the candidate's attribute at the embedded asset.
///
/// When an `<img src>` is rewritten its responsive attributes go too, so
/// readers cannot pick a remote variant instead.
fn set_reference(document: &mut Html, candidate: &MediaCandidate, asset_name: &str) -> Result<()> {
    rebuild_element(document, candidate.target, |attrs| {
        if candidate.attribute == "src" {
            attrs.retain(|(key, _)| !is_responsive(key));
        }
        match attrs.iter_mut().find(|(key, _)| key == candidate.attribute) {
            Some((_, value)) => *value = asset_name.to_string(),
            None => attrs.push((candidate.attribute.to_string(), asset_name.to_string())),
        }
    })
}

/// Remove every reference inside a picture except `keep`.
///
/// Other `<source>`s and `<img src>`s are detached; a fallback `<img>`
/// without `src` stays but loses its `srcset`/`sizes`.
fn prune_alternatives(document: &mut Html, picture: NodeId, keep: NodeId) -> Result<()> {
    let selector = compile("img, source")?;
    let Some(picture) = document.tree.get(picture).and_then(ElementRef::wrap) else {
        return Ok(());
    };

    let mut detached = Vec::new();
    let mut stripped = Vec::new();
    for element in picture.select(&selector).filter(|element| element.id() != keep) {
        let value = element.value();
        if value.name() == "source" || value.attr("src").is_some() {
            detached.push(element.id());
        } else if value.attrs().any(|(key, _)| is_responsive(key)) {
            stripped.push(element.id());
        }
    }

    for id in detached {
        detach(document, id);
    }
    for id in stripped {
        rebuild_element(document, id, |attrs| {
            attrs.retain(|(key, _)| !is_responsive(key))
        })?;
    }
    Ok(())
}

fn is_responsive(attribute: &str) -> bool {
    matches!(attribute, "srcset" | "sizes")
}

/// Replace element `id` with a copy whose attributes went through `edit`.
fn rebuild_element<F>(document: &mut Html, id: NodeId, edit: F) -> Result<()>
where
    F: FnOnce(&mut Vec<(String, String)>),
{
    let Some(element) = document.tree.get(id).and_then(ElementRef::wrap) else {
        return Ok(());
    };

    let tag = element.value().name().to_string();
    let mut attrs: Vec<(String, String)> = element
        .value()
        .attrs()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    edit(&mut attrs);

    let replacement = build_element(&tag, &attrs)?;
    if let Some(mut node) = document.tree.get_mut(id) {
        *node.value() = replacement;
    }
    Ok(())
}

/// Build a detached element node by parsing a single start tag.
fn build_element(tag: &str, attrs: &[(String, String)]) -> Result<Node> {
    let mut markup = format!("<{}", tag);
    for (key, value) in attrs {
        markup.push_str(&format!(" {}=\"{}\"", key, escape_attribute(value)));
    }
    markup.push('>');

    let fragment = Html::parse_fragment(&markup);
    let selector = compile(tag)?;
    fragment
        .select(&selector)
        .next()
        .map(|element| Node::Element(element.value().clone()))
        .ok_or_else(|| ExportError::Markup {
            message: format!("could not build <{}> element", tag),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves fixed bodies and records every requested URL.
    #[derive(Default)]
    struct FakeFetcher {
        bodies: HashMap<String, Vec<u8>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn serving(urls: &[(&str, &str)]) -> Self {
            Self {
                bodies: urls
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
                    .collect(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssetFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> std::result::Result<Asset, FetchError> {
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

    async fn rewrite(fetcher: &FakeFetcher, html: &str) -> RewrittenContent {
        ContentRewriter::new(fetcher, RewriteOptions::new())
            .rewrite(html)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_markup_without_media_passes_through() {
        let fetcher = FakeFetcher::default();
        let html = r#"<p>Hello <b>world</b></p><ul><li><a href="https://example.com">link</a></li></ul>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.html, html);
        assert!(result.assets.is_empty());
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_scripts_and_styles_are_removed() {
        let fetcher = FakeFetcher::default();
        let html = r#"<style>p { color: red }</style><p>Text<script>alert(1)</script></p><div><script src="x.js"></script></div>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.html, "<p>Text</p><div></div>");
    }

    #[tokio::test]
    async fn test_image_is_embedded() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/a.png", "PNGDATA")]);
        let html = r#"<p><img src="https://cdn.example.com/a.png"></p>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.assets.len(), 1);
        let asset = &result.assets[0];
        assert!(asset.name.ends_with(".png"));
        assert_eq!(asset.bytes, b"PNGDATA");
        assert_eq!(result.html, format!(r#"<p><img src="{}"/></p>"#, asset.name));
        assert_eq!(result.report.embedded, 1);
    }

    #[tokio::test]
    async fn test_failed_image_is_removed() {
        let fetcher = FakeFetcher::default();
        let html = r#"<p>Before<img src="https://cdn.example.com/missing.png">After</p>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.html, "<p>BeforeAfter</p>");
        assert!(result.assets.is_empty());
        assert_eq!(result.report.dropped, 1);
        assert_eq!(fetcher.requests(), vec!["https://cdn.example.com/missing.png"]);
    }

    #[tokio::test]
    async fn test_image_without_source_is_removed_without_fetch() {
        let fetcher = FakeFetcher::default();

        let result = rewrite(&fetcher, r#"<p>x<img alt="lazy"></p>"#).await;

        assert_eq!(result.html, "<p>x</p>");
        assert_eq!(result.report.no_candidate, 1);
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_figure_keeps_caption_only() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/f.jpg", "JPG")]);
        let html = r#"<figure class="wp-block"><div><img src="https://cdn.example.com/f.jpg" alt="A cat"></div><figcaption>A <em>cat</em><script>x()</script></figcaption><p>credit</p></figure>"#;

        let result = rewrite(&fetcher, html).await;

        let asset = &result.assets[0];
        assert!(result.html.starts_with(r#"<figure class="wp-block"><img "#));
        assert!(result.html.contains(&format!(r#"src="{}""#, asset.name)));
        assert!(result.html.contains(r#"alt="A cat""#));
        assert!(result.html.ends_with("/><figcaption>A <em>cat</em></figcaption></figure>"));
        assert!(!result.html.contains("credit"));
        assert!(!result.html.contains("script"));
    }

    #[tokio::test]
    async fn test_failed_figure_is_removed_entirely() {
        let fetcher = FakeFetcher::default();
        let html = r#"<p>a</p><figure><img src="https://cdn.example.com/f.jpg"><figcaption>Gone</figcaption></figure><p>b</p>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.html, "<p>a</p><p>b</p>");
        assert_eq!(result.report.dropped, 1);
    }

    #[tokio::test]
    async fn test_figure_without_media_is_left_alone() {
        let fetcher = FakeFetcher::default();
        let html = "<figure><pre>code</pre><figcaption>Listing</figcaption></figure>";

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.html, html);
    }

    #[tokio::test]
    async fn test_picture_source_is_rewritten_in_place() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/p.webp", "WEBP")]);
        let html = r#"<picture><source srcset="https://cdn.example.com/p.webp 1x, https://cdn.example.com/p2.webp 2x"><source srcset="https://cdn.example.com/other.avif"><img alt="pic"></picture>"#;

        let result = rewrite(&fetcher, html).await;

        let asset = &result.assets[0];
        assert!(asset.name.ends_with(".webp"));
        assert!(result.html.contains(&format!(r#"<source srcset="{}"/>"#, asset.name)));
        assert!(!result.html.contains("other.avif"));
        assert_eq!(fetcher.requests(), vec!["https://cdn.example.com/p.webp"]);
    }

    #[tokio::test]
    async fn test_picture_img_drops_remote_alternatives() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/p.jpg", "JPG")]);
        let html = r#"<picture><source srcset="https://cdn.example.com/p.webp"><img src="https://cdn.example.com/p.jpg" srcset="https://cdn.example.com/p@2x.jpg 2x"></picture>"#;

        let result = rewrite(&fetcher, html).await;

        let asset = &result.assets[0];
        assert_eq!(
            result.html,
            format!(r#"<picture><img src="{}"/></picture>"#, asset.name)
        );
    }

    #[tokio::test]
    async fn test_nested_media_is_fetched_once() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/n.png", "PNG")]);
        let html = r#"<figure><picture><img src="https://cdn.example.com/n.png"></picture></figure>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(fetcher.requests().len(), 1);
        assert_eq!(result.assets.len(), 1);
        assert_eq!(result.html.matches("<img").count(), 1);
    }

    #[tokio::test]
    async fn test_same_url_gets_distinct_assets() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/same.gif", "GIF")]);
        let html = r#"<img src="https://cdn.example.com/same.gif"><img src="https://cdn.example.com/same.gif">"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.assets.len(), 2);
        assert_ne!(result.assets[0].name, result.assets[1].name);
        for asset in &result.assets {
            assert!(result.html.contains(&asset.name));
        }
    }

    #[tokio::test]
    async fn test_figures_are_processed_before_pictures_and_images() {
        let fetcher = FakeFetcher::serving(&[
            ("https://cdn.example.com/1.png", "1"),
            ("https://cdn.example.com/2.png", "2"),
            ("https://cdn.example.com/3.png", "3"),
        ]);
        let html = r#"<img src="https://cdn.example.com/1.png"><picture><img src="https://cdn.example.com/2.png"></picture><figure><img src="https://cdn.example.com/3.png"></figure>"#;

        rewrite(&fetcher, html).await;

        assert_eq!(
            fetcher.requests(),
            vec![
                "https://cdn.example.com/3.png",
                "https://cdn.example.com/2.png",
                "https://cdn.example.com/1.png",
            ]
        );
    }

    #[tokio::test]
    async fn test_data_url_policy() {
        let fetcher = FakeFetcher::default();
        let html = r#"<p><img src="data:image/png;base64,AAAA"></p>"#;

        let kept = rewrite(&fetcher, html).await;
        assert_eq!(kept.html, r#"<p><img src="data:image/png;base64,AAAA"/></p>"#);
        assert_eq!(kept.report.inline, 1);

        let dropped = ContentRewriter::new(
            &fetcher,
            RewriteOptions::new().with_data_urls(DataUrlPolicy::Drop),
        )
        .rewrite(html)
        .await
        .unwrap();
        assert_eq!(dropped.html, "<p></p>");

        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_inline_picture_drops_remote_alternatives() {
        let fetcher = FakeFetcher::default();
        let html = r#"<picture><source srcset="/img/a.webp 1x"><img src="data:image/gif;base64,R0lGOD"></picture>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(
            result.html,
            r#"<picture><img src="data:image/gif;base64,R0lGOD"/></picture>"#
        );
        assert_eq!(result.report.inline, 1);
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_inline_image_loses_remote_srcset() {
        let fetcher = FakeFetcher::default();
        let html = r#"<p><img src="data:image/gif;base64,R0lGOD" srcset="https://cdn.example.com/big.jpg 2x" sizes="100vw"></p>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.html, r#"<p><img src="data:image/gif;base64,R0lGOD"/></p>"#);
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_inline_figure_keeps_only_inline_image() {
        let fetcher = FakeFetcher::default();
        let html = r#"<figure><img src="data:image/png;base64,AA"><img src="https://cdn.example.com/real.png"><figcaption>c</figcaption></figure>"#;

        let result = rewrite(&fetcher, html).await;

        assert!(result.html.contains(r#"src="data:image/png;base64,AA""#));
        assert!(!result.html.contains("real.png"));
        assert_eq!(result.html.matches("<img").count(), 1);
        assert!(result.html.ends_with("<figcaption>c</figcaption></figure>"));
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_img_of_rewritten_picture_loses_srcset() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/p.webp", "WEBP")]);
        let html = r#"<picture><source srcset="https://cdn.example.com/p.webp"><img srcset="https://cdn.example.com/p.jpg 2x"></picture>"#;

        let result = rewrite(&fetcher, html).await;

        let asset = &result.assets[0];
        assert_eq!(
            result.html,
            format!(r#"<picture><source srcset="{}"/><img/></picture>"#, asset.name)
        );
    }

    #[tokio::test]
    async fn test_caption_images_are_embedded() {
        let fetcher = FakeFetcher::serving(&[
            ("https://cdn.example.com/a.png", "A"),
            ("https://cdn.example.com/icon.png", "ICON"),
        ]);
        let html = r#"<figure><img src="https://cdn.example.com/a.png" alt="main"><figcaption>by <img src="https://cdn.example.com/icon.png" alt="icon"></figcaption></figure>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(
            fetcher.requests(),
            vec!["https://cdn.example.com/a.png", "https://cdn.example.com/icon.png"]
        );
        assert_eq!(result.assets.len(), 2);
        for asset in &result.assets {
            assert!(result.html.contains(&format!(r#"src="{}""#, asset.name)));
        }
        assert!(!result.html.contains("https://"));
        assert!(result.html.contains(r#"alt="main""#));
    }

    #[tokio::test]
    async fn test_failed_caption_image_is_removed() {
        let fetcher = FakeFetcher::serving(&[("https://cdn.example.com/a.png", "A")]);
        let html = r#"<figure><img src="https://cdn.example.com/a.png"><figcaption>by <img src="icon.png"></figcaption></figure>"#;

        let result = rewrite(&fetcher, html).await;

        assert_eq!(result.assets.len(), 1);
        assert!(result.html.ends_with("<figcaption>by </figcaption></figure>"));
        assert!(!result.html.contains("icon.png"));
    }

    #[tokio::test]
    async fn test_relative_urls_use_base() {
        let fetcher = FakeFetcher::serving(&[("https://blog.example.com/images/r.png", "R")]);
        let options =
            RewriteOptions::new().with_base_url(Some("https://blog.example.com/posts/1"));

        let result = ContentRewriter::new(&fetcher, options)
            .rewrite(r#"<img src="/images/r.png">"#)
            .await
            .unwrap();

        assert_eq!(result.assets.len(), 1);
        assert_eq!(fetcher.requests(), vec!["https://blog.example.com/images/r.png"]);
    }
}
