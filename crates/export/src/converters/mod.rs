//! Markup converters.

pub mod xhtml;

pub use xhtml::{escape_attribute, escape_text, serialize_children};
