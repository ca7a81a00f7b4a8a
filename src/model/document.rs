//! Document-level types.

use super::ParagraphRecord;
use serde::{Deserialize, Serialize};

/// A parsed legacy document: an ordered sequence of paragraph records.
///
/// Order is significant and fixed. The serializer walks the sequence
/// exactly once, front to back, and uses the lookahead queries below to
/// resolve table boundaries from the `in_table` flag of neighboring
/// records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in document order
    pub paragraphs: Vec<ParagraphRecord>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Create a document from a paragraph sequence.
    pub fn from_paragraphs(paragraphs: Vec<ParagraphRecord>) -> Self {
        Self { paragraphs }
    }

    /// Append a paragraph.
    pub fn push(&mut self, paragraph: ParagraphRecord) {
        self.paragraphs.push(paragraph);
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get a paragraph by index.
    pub fn get(&self, index: usize) -> Option<&ParagraphRecord> {
        self.paragraphs.get(index)
    }

    /// Whether the paragraph at `index` is the first cell of a table:
    /// it is in a table and the previous paragraph is not (or there is
    /// no previous paragraph).
    ///
    /// Out-of-range lookups fail safe to `false`.
    pub fn opens_table(&self, index: usize) -> bool {
        let Some(current) = self.paragraphs.get(index) else {
            return false;
        };
        if !current.in_table {
            return false;
        }
        match index.checked_sub(1).and_then(|i| self.paragraphs.get(i)) {
            Some(prev) => !prev.in_table,
            None => true,
        }
    }

    /// Whether the row ending at `index` is the table's last row: the
    /// next paragraph is not in a table (or there is no next
    /// paragraph).
    ///
    /// Out-of-range lookups fail safe to `false`, except at the end of
    /// the document where an open table always closes.
    pub fn closes_table(&self, index: usize) -> bool {
        let Some(current) = self.paragraphs.get(index) else {
            return false;
        };
        if !current.in_table || !current.is_table_row_end {
            return false;
        }
        match self.paragraphs.get(index + 1) {
            Some(next) => !next.in_table,
            None => true,
        }
    }

    /// Parse a document from its JSON paragraph-dump form, the
    /// interchange format external parsers emit.
    pub fn from_json(data: &str) -> crate::error::Result<Self> {
        serde_json::from_str(data).map_err(|e| crate::error::Error::Decode(e.to_string()))
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::error::Error::Other(e.to_string()))
    }

    /// Count paragraphs inside tables.
    pub fn table_paragraph_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.in_table).count()
    }

    /// Count numbered list items.
    pub fn list_item_count(&self) -> usize {
        self.paragraphs
            .iter()
            .filter(|p| !p.in_table && p.is_list_item())
            .count()
    }
}
