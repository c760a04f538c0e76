//! Turns rewritten entries into books.

use chrono::{DateTime, NaiveDate, Utc};
use fluxpub_types::Entry;

use crate::book::{Book, Chapter};
use crate::converters::escape_text;
use crate::error::Result;
use crate::types::RewrittenContent;

/// File name of the only chapter of a single-entry book.
pub const SINGLE_CHAPTER_FILE: &str = "chapter.xhtml";

/// Author of combined books, which mix many authors.
pub const COMBINED_AUTHOR: &str = "Miniflux";

/// Chapter body: the title as a top-level heading followed by the content.
pub fn chapter_body(title: &str, content: &str) -> String {
    format!("<h1>{}</h1>{}", escape_text(title), content)
}

/// Chapter file name that stays unique when entries share a book.
pub fn combined_chapter_file(entry: &Entry) -> String {
    format!("chapter_{}.xhtml", entry.id)
}

/// Title of a combined book assembled on `date`.
pub fn combined_title(date: NaiveDate) -> String {
    format!("Miniflux Unread {}", date.format("%Y-%m-%d"))
}

/// Build the book for a single entry.
pub fn single_entry_book(entry: &Entry, content: RewrittenContent) -> Result<Book> {
    let mut book = Book::new(entry.title.clone());
    book.add_author(entry.author_or_default());
    if let Some(feed) = entry.feed_title() {
        book.add_subject(feed);
    }
    if let Some(published) = entry.published_at {
        book.set_date(published.with_timezone(&Utc));
    }

    book.add_chapter_with_assets(
        Chapter::new(
            entry.title.clone(),
            SINGLE_CHAPTER_FILE,
            chapter_body(&entry.title, &content.html),
        ),
        content.assets,
    )?;

    Ok(book)
}

/// Accumulates entries, in call order, into one book.
#[derive(Debug)]
pub struct CombinedBook {
    book: Book,
}

impl CombinedBook {
    pub fn new(assembled_at: DateTime<Utc>) -> Self {
        let mut book = Book::new(combined_title(assembled_at.date_naive()));
        book.add_author(COMBINED_AUTHOR);
        book.set_date(assembled_at);
        Self { book }
    }

    /// Append `entry` as the next chapter.
    ///
    /// A rejected entry leaves the book exactly as it was.
    pub fn push_entry(&mut self, entry: &Entry, content: RewrittenContent) -> Result<()> {
        self.book.add_chapter_with_assets(
            Chapter::new(
                entry.title.clone(),
                combined_chapter_file(entry),
                chapter_body(&entry.title, &content.html),
            ),
            content.assets,
        )?;
        if let Some(feed) = entry.feed_title() {
            self.book.add_subject(feed);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.book.chapters().len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.chapters().is_empty()
    }

    pub fn finish(self) -> Book {
        self.book
    }
}
