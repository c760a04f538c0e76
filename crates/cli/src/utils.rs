//! File naming helpers.

use chrono::NaiveDate;
use fluxpub_types::Entry;

/// Titles are cut to this many characters in file names.
pub const MAX_TITLE_CHARS: usize = 80;

/// Make `name` safe to use as a file name component.
///
/// Whitespace becomes `_`, path separators and characters reserved on
/// common filesystems are removed.
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .filter_map(|c| match c {
            '/' | '\\' | '?' | '*' | ':' | '|' | '"' | '<' | '>' => None,
            c if c.is_whitespace() => Some('_'),
            c if c.is_control() => None,
            c => Some(c),
        })
        .take(MAX_TITLE_CHARS)
        .collect()
}

/// File name of the book written for a single entry.
pub fn output_file_name(entry: &Entry) -> String {
    format!("{}_{}.epub", entry.id, sanitize_filename(&entry.title))
}

/// File name of the combined book assembled on `date`.
pub fn combined_file_name(date: NaiveDate) -> String {
    format!("miniflux_{}.epub", date.format("%Y-%m-%d"))
}
