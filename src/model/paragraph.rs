//! Paragraph-level types.

use serde::{Deserialize, Serialize};

/// One unit of parsed document content with layout and structural
/// attributes, independent of the binary format that produced it.
///
/// Records are produced by an external `.doc` parser and consumed
/// read-only by the serializer. For table rows the parser sets
/// `is_table_row_end` on the row's final cell record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Raw paragraph text
    pub text: String,

    /// Whether the paragraph lives inside a table
    pub in_table: bool,

    /// Whether this record is the last cell of its table row
    pub is_table_row_end: bool,

    /// Numbered-list nesting level (0-based), present for list items
    pub list_level: Option<u8>,

    /// Left indent in layout units
    pub left_indent: i32,

    /// First-line indent in layout units
    pub first_line_indent: i32,

    /// Paragraph justification
    pub justification: Justification,

    /// Style sheet index
    pub style_index: u16,
}

impl ParagraphRecord {
    /// Create a plain paragraph with default layout attributes.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            in_table: false,
            is_table_row_end: false,
            list_level: None,
            left_indent: 0,
            first_line_indent: 0,
            justification: Justification::Left,
            style_index: 0,
        }
    }

    /// Create a numbered list item at the given 0-based level.
    pub fn list_item(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.list_level = Some(level);
        p
    }

    /// Create a table cell.
    pub fn table_cell(text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.in_table = true;
        p
    }

    /// Create a table cell that terminates its row.
    pub fn table_row_end(text: impl Into<String>) -> Self {
        let mut p = Self::table_cell(text);
        p.is_table_row_end = true;
        p
    }

    /// Set the justification and return self.
    pub fn justified(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    /// Set the left indent and return self.
    pub fn indented(mut self, left_indent: i32) -> Self {
        self.left_indent = left_indent;
        self
    }

    /// Whether this paragraph carries list numbering.
    pub fn is_list_item(&self) -> bool {
        self.list_level.is_some()
    }

    /// Whether the paragraph text is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Paragraph justification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Any other justification mode
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_defaults() {
        let p = ParagraphRecord::with_text("hello");
        assert!(!p.in_table);
        assert!(!p.is_table_row_end);
        assert!(p.list_level.is_none());
        assert_eq!(p.justification, Justification::Left);
    }

    #[test]
    fn test_list_item() {
        let p = ParagraphRecord::list_item("item", 2);
        assert!(p.is_list_item());
        assert_eq!(p.list_level, Some(2));
    }

    #[test]
    fn test_table_builders() {
        let cell = ParagraphRecord::table_cell("a");
        assert!(cell.in_table);
        assert!(!cell.is_table_row_end);

        let end = ParagraphRecord::table_row_end("b");
        assert!(end.in_table);
        assert!(end.is_table_row_end);
    }

    #[test]
    fn test_is_blank() {
        assert!(ParagraphRecord::with_text("  \t ").is_blank());
        assert!(!ParagraphRecord::with_text(" x ").is_blank());
    }
}
