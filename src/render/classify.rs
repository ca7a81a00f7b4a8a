//! Paragraph classification.

use crate::model::ParagraphRecord;

/// Processing mode for one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// Part of a table
    TableCell,
    /// Numbered list item
    ListItem,
    /// Plain prose paragraph
    Normal,
}

/// Classify a paragraph record into exactly one processing mode.
///
/// `in_table` takes precedence over `list_level`: a paragraph inside a
/// table is always a table cell even when it would otherwise look
/// numbered.
pub fn classify(para: &ParagraphRecord) -> ParagraphKind {
    if para.in_table {
        ParagraphKind::TableCell
    } else if para.list_level.is_some() {
        ParagraphKind::ListItem
    } else {
        ParagraphKind::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_normal() {
        let p = ParagraphRecord::with_text("plain prose");
        assert_eq!(classify(&p), ParagraphKind::Normal);
    }

    #[test]
    fn test_classify_list_item() {
        let p = ParagraphRecord::list_item("item", 0);
        assert_eq!(classify(&p), ParagraphKind::ListItem);
    }

    #[test]
    fn test_classify_table_cell() {
        let p = ParagraphRecord::table_cell("cell");
        assert_eq!(classify(&p), ParagraphKind::TableCell);
    }

    #[test]
    fn test_table_wins_over_list() {
        let mut p = ParagraphRecord::table_cell("numbered cell");
        p.list_level = Some(1);
        assert_eq!(classify(&p), ParagraphKind::TableCell);
    }
}
