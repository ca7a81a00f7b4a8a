//! Data model for parsed legacy documents.
//!
//! Paragraph records are the read-only input contract between the
//! external binary parser and the markup serializer.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::{Justification, ParagraphRecord};
