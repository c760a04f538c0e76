//! In-memory book model handed to the EPUB writer.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use scraper::Html;
use uuid::Uuid;

use crate::error::{ExportError, Result};
use crate::resolve::first_srcset_url;
use crate::rewrite::compile;
use crate::types::Asset;

/// One content document of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    /// File name inside the container, unique within the book.
    pub file_name: String,
    /// XHTML body fragment, starting with the title heading.
    pub body: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, file_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file_name: file_name.into(),
            body: body.into(),
        }
    }
}

/// Reading-order position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpineItem {
    /// The generated navigation page, always first.
    Navigation,
    /// A chapter, by file name.
    Chapter(String),
}

/// Table of contents line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub file_name: String,
}

/// A book ready to be serialized.
#[derive(Debug, Clone)]
pub struct Book {
    pub identifier: Uuid,
    pub title: String,
    pub authors: Vec<String>,
    pub subjects: Vec<String>,
    pub date: DateTime<Utc>,
    pub language: String,
    chapters: Vec<Chapter>,
    assets: Vec<Asset>,
    asset_names: HashSet<String>,
}

impl Book {
    /// Create an empty book with a fresh identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            identifier: Uuid::new_v4(),
            title: title.into(),
            authors: Vec::new(),
            subjects: Vec::new(),
            date: Utc::now(),
            language: "en".to_string(),
            chapters: Vec::new(),
            assets: Vec::new(),
            asset_names: HashSet::new(),
        }
    }

    pub fn add_author(&mut self, author: impl Into<String>) -> &mut Self {
        let author = author.into();
        if !self.authors.contains(&author) {
            self.authors.push(author);
        }
        self
    }

    pub fn add_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        let subject = subject.into();
        if !self.subjects.contains(&subject) {
            self.subjects.push(subject);
        }
        self
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) -> &mut Self {
        self.date = date;
        self
    }

    /// Append a chapter at the end of the reading order.
    pub fn add_chapter(&mut self, chapter: Chapter) -> Result<()> {
        if self.has_chapter(&chapter.file_name) {
            return Err(ExportError::DuplicateChapter {
                file_name: chapter.file_name,
            });
        }
        self.chapters.push(chapter);
        Ok(())
    }

    /// Append a chapter together with the assets it references.
    ///
    /// Nothing is added unless the file name and every asset name are new
    /// and each local reference in the body resolves to an asset of the
    /// book or of `assets`.
    pub fn add_chapter_with_assets(&mut self, chapter: Chapter, assets: Vec<Asset>) -> Result<()> {
        if self.has_chapter(&chapter.file_name) {
            return Err(ExportError::DuplicateChapter {
                file_name: chapter.file_name,
            });
        }

        let mut incoming = HashSet::new();
        for asset in &assets {
            if self.asset_names.contains(&asset.name) || !incoming.insert(asset.name.as_str()) {
                return Err(ExportError::DuplicateAsset {
                    name: asset.name.clone(),
                });
            }
        }

        let missing = missing_reference(&chapter.body, |name| {
            self.asset_names.contains(name) || incoming.contains(name)
        })?;
        if let Some(reference) = missing {
            return Err(missing_asset(&chapter, &reference));
        }

        for asset in assets {
            self.asset_names.insert(asset.name.clone());
            self.assets.push(asset);
        }
        self.chapters.push(chapter);
        Ok(())
    }

    fn has_chapter(&self, file_name: &str) -> bool {
        self.chapters
            .iter()
            .any(|existing| existing.file_name == file_name)
    }

    pub fn add_asset(&mut self, asset: Asset) -> Result<()> {
        if !self.asset_names.insert(asset.name.clone()) {
            return Err(ExportError::DuplicateAsset { name: asset.name });
        }
        self.assets.push(asset);
        Ok(())
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    pub fn toc(&self) -> Vec<TocEntry> {
        self.chapters
            .iter()
            .map(|chapter| TocEntry {
                title: chapter.title.clone(),
                file_name: chapter.file_name.clone(),
            })
            .collect()
    }

    pub fn spine(&self) -> Vec<SpineItem> {
        std::iter::once(SpineItem::Navigation)
            .chain(
                self.chapters
                    .iter()
                    .map(|chapter| SpineItem::Chapter(chapter.file_name.clone())),
            )
            .collect()
    }

    /// Check that every local image reference resolves to an asset.
    ///
    /// Absolute and `data:` URLs are not local references and are ignored.
    pub fn validate(&self) -> Result<()> {
        if self.chapters.is_empty() {
            return Err(ExportError::InvalidBook {
                message: format!("'{}' has no chapters", self.title),
            });
        }

        for chapter in &self.chapters {
            let missing = missing_reference(&chapter.body, |name| self.asset_names.contains(name))?;
            if let Some(reference) = missing {
                return Err(missing_asset(chapter, &reference));
            }
        }

        Ok(())
    }
}

/// First local image reference in `body` that `is_asset` does not know.
fn missing_reference<F>(body: &str, is_asset: F) -> Result<Option<String>>
where
    F: Fn(&str) -> bool,
{
    let images = compile("img[src]")?;
    let sources = compile("source[srcset]")?;

    let fragment = Html::parse_fragment(body);
    let missing = fragment
        .select(&images)
        .filter_map(|image| image.value().attr("src"))
        .chain(
            fragment
                .select(&sources)
                .filter_map(|source| source.value().attr("srcset"))
                .filter_map(first_srcset_url),
        )
        .find(|reference| is_local_reference(reference) && !is_asset(*reference))
        .map(str::to_string);

    Ok(missing)
}

fn missing_asset(chapter: &Chapter, reference: &str) -> ExportError {
    ExportError::InvalidBook {
        message: format!(
            "chapter '{}' references missing asset '{}'",
            chapter.file_name, reference
        ),
    }
}

fn is_local_reference(reference: &str) -> bool {
    !(reference.contains("://") || reference.starts_with("//") || reference.starts_with("data:"))
}
