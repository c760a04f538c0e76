//! EPUB serialization of [`Book`]s.

use std::path::Path;

use epub_builder::{EpubBuilder, EpubContent, ReferenceType, ZipLibrary};
use tokio::io::AsyncWriteExt;

use crate::book::{Book, Chapter};
use crate::converters::escape_text;
use crate::error::{ExportError, Result};

/// MIME type of EPUB containers.
pub const EPUB_MIME_TYPE: &str = "application/epub+zip";

/// Writes books as EPUB containers.
pub struct EpubWriter;

impl EpubWriter {
    /// Create new EPUB writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize `book` into EPUB bytes.
    ///
    /// The book is validated first; a book referencing missing assets is
    /// never serialized.
    pub fn write(&self, book: &Book) -> Result<Vec<u8>> {
        book.validate()?;

        let mut epub_builder = EpubBuilder::new(ZipLibrary::new().map_err(epub_error)?)
            .map_err(epub_error)?;

        // Set metadata
        epub_builder.set_uuid(book.identifier);
        epub_builder.set_title(book.title.clone());
        for author in &book.authors {
            epub_builder.add_author(author.clone());
        }
        for subject in &book.subjects {
            epub_builder.add_subject(subject.clone());
        }
        epub_builder.set_lang(book.language.clone());
        epub_builder.set_publication_date(book.date);

        // Navigation page goes first in the spine
        epub_builder.inline_toc();

        for chapter in book.chapters() {
            let document = chapter_document(chapter);
            epub_builder
                .add_content(
                    EpubContent::new(chapter.file_name.as_str(), document.as_bytes())
                        .title(chapter.title.as_str())
                        .reftype(ReferenceType::Text),
                )
                .map_err(epub_error)?;
        }

        for asset in book.assets() {
            epub_builder
                .add_resource(
                    asset.name.as_str(),
                    asset.bytes.as_slice(),
                    asset.media_type.as_str(),
                )
                .map_err(epub_error)?;
        }

        let mut epub_data = Vec::new();
        epub_builder.generate(&mut epub_data).map_err(epub_error)?;
        Ok(epub_data)
    }

    /// Serialize `book` and write it to `path`.
    ///
    /// Bytes go to a sibling `.part` file that is renamed into place, so a
    /// failed write never leaves a truncated EPUB at `path`.
    pub async fn write_to_path(&self, book: &Book, path: &Path) -> Result<u64> {
        let epub_data = self.write(book)?;
        let partial = path.with_extension("epub.part");

        if let Err(error) = write_then_rename(&partial, path, &epub_data).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(ExportError::Io(error));
        }

        tracing::info!(
            "Wrote {} ({} chapters, {} assets, {} bytes)",
            path.display(),
            book.chapters().len(),
            book.assets().len(),
            epub_data.len()
        );
        Ok(epub_data.len() as u64)
    }
}

impl Default for EpubWriter {
    fn default() -> Self {
        Self::new()
    }
}

async fn write_then_rename(partial: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(partial).await?;
    file.write_all(data).await?;
    file.flush().await?;
    file.sync_all().await?;
    tokio::fs::rename(partial, path).await
}

fn epub_error(error: impl std::fmt::Display) -> ExportError {
    ExportError::Epub {
        message: error.to_string(),
    }
}

/// Wrap a chapter body in a complete XHTML document.
fn chapter_document(chapter: &Chapter) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops">
<head>
    <title>{}</title>
</head>
<body>
{}
</body>
</html>"#,
        escape_text(&chapter.title),
        chapter.body
    )
}
