//! # docflat
//!
//! Flattens parsed legacy word-processor (`.doc`) documents into a
//! single text artifact that preserves heading structure, hierarchical
//! list numbering, and tabular data using a compact inline markup
//! grammar.
//!
//! The crate does not decode the binary container itself; an external
//! parser supplies the ordered [`ParagraphRecord`] stream (or an
//! implementation of [`convert::DocDecoder`] at the upload boundary),
//! and docflat's serializer does the rest.
//!
//! ## Quick Start
//!
//! ```
//! use docflat::{to_markup, Document, ParagraphRecord};
//!
//! fn main() -> docflat::Result<()> {
//!     let doc = Document::from_paragraphs(vec![
//!         ParagraphRecord::with_text("前言"),
//!         ParagraphRecord::list_item("适用范围", 0),
//!     ]);
//!
//!     let text = to_markup(&doc)?;
//!     assert!(text.contains(" Pnumber 1 适用范围:"));
//!     Ok(())
//! }
//! ```
//!
//! ## Output grammar
//!
//! - Plain prose: `<text>\n\n`, optionally preceded by a line of fifty
//!   `+` characters for short title-like paragraphs
//! - List item: ` Pnumber <dot-path> <text>:\n\n`
//! - Table: opens with `\nTable:`, cells joined by `||`, non-final
//!   rows end with `+++`, short rows padded with `||-`, multi-line
//!   cells terminated with `&&`
//! - Recovered cell failure: `||ERROR||+++\n`

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_upload, ConvertOptions, ConvertResult, DocDecoder, ErrorResponse};
pub use detect::{is_legacy_doc, is_legacy_doc_bytes};
pub use error::{Error, Result};
pub use model::{Document, Justification, ParagraphRecord};
pub use render::{
    to_markup, to_markup_with_options, CellErrorMode, MarkupOptions, MarkupSerializer,
};

/// Serialize a document that was already parsed elsewhere, using
/// default options.
///
/// ```
/// use docflat::{serialize, Document, ParagraphRecord};
///
/// let doc = Document::from_paragraphs(vec![ParagraphRecord::with_text("hello")]);
/// assert_eq!(serialize(&doc).unwrap(), "hello\n\n");
/// ```
pub fn serialize(doc: &Document) -> Result<String> {
    render::to_markup(doc)
}

/// Serialize with explicit options.
pub fn serialize_with_options(doc: &Document, options: &MarkupOptions) -> Result<String> {
    render::to_markup_with_options(doc, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_helper() {
        let doc = Document::from_paragraphs(vec![ParagraphRecord::with_text("one")]);
        assert_eq!(serialize(&doc).unwrap(), "one\n\n");
    }

    #[test]
    fn test_serialize_with_options_helper() {
        let doc = Document::from_paragraphs(vec![ParagraphRecord::table_row_end("cell")]);
        let options = MarkupOptions::new().strict_cells();
        let output = serialize_with_options(&doc, &options).unwrap();
        assert_eq!(output, "\nTable:||cell");
    }
}
