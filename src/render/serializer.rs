//! Output assembler.
//!
//! Walks the paragraph sequence once in order, classifies each
//! paragraph, dispatches to the matching renderer, and accumulates one
//! output string. Every renderer reads and updates state left by prior
//! paragraphs (counters, table flags), so the traversal is strictly
//! sequential.

use log::warn;
use regex::Regex;

use crate::error::Result;
use crate::model::Document;

use super::classify::{classify, ParagraphKind};
use super::counters::CounterState;
use super::heading::{self, title_pattern};
use super::options::{CellErrorMode, MarkupOptions};
use super::table::{self, TableState, ERROR_SENTINEL};

/// Convert a document to flat markup with default options.
pub fn to_markup(doc: &Document) -> Result<String> {
    to_markup_with_options(doc, &MarkupOptions::default())
}

/// Convert a document to flat markup.
pub fn to_markup_with_options(doc: &Document, options: &MarkupOptions) -> Result<String> {
    MarkupSerializer::new(options.clone()).serialize(doc)
}

/// Stateful paragraph-stream serializer.
///
/// Created once per document traversal; the counter and table state
/// mutate monotonically as paragraphs are consumed and are discarded
/// after the final normalization pass.
pub struct MarkupSerializer {
    options: MarkupOptions,
    counters: CounterState,
    table: TableState,
    title_pattern: Regex,
}

impl MarkupSerializer {
    /// Create a serializer for one traversal.
    pub fn new(options: MarkupOptions) -> Self {
        Self {
            options,
            counters: CounterState::new(),
            table: TableState::new(),
            title_pattern: title_pattern(),
        }
    }

    /// Serialize the document into one markup string.
    pub fn serialize(mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        for (index, para) in doc.paragraphs.iter().enumerate() {
            match classify(para) {
                ParagraphKind::TableCell => self.append_table_cell(&mut output, doc, index)?,
                ParagraphKind::ListItem => self.append_list_item(&mut output, doc, index)?,
                ParagraphKind::Normal => self.append_normal(&mut output, doc, index),
            }
        }

        Ok(normalize(&output))
    }

    fn append_table_cell(&mut self, output: &mut String, doc: &Document, index: usize) -> Result<()> {
        let para = &doc.paragraphs[index];
        let opens_table = doc.opens_table(index);
        let is_last_row = doc.closes_table(index);

        match table::process_cell(&mut self.table, para, opens_table, is_last_row) {
            Ok(segment) => output.push_str(&segment),
            Err(err) if self.options.cell_error_mode == CellErrorMode::Sentinel => {
                warn!("table cell at paragraph {} failed to render: {}", index, err);
                output.push_str(ERROR_SENTINEL);
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn append_list_item(&mut self, output: &mut String, doc: &Document, index: usize) -> Result<()> {
        let para = &doc.paragraphs[index];
        // list_level is present for every paragraph classified ListItem
        let level = para.list_level.unwrap_or(0) as usize + 1;

        self.counters.maybe_reset(index);
        self.counters.advance(level)?;

        output.push_str(" Pnumber ");
        output.push_str(&self.counters.dot_path(level));
        output.push(' ');
        output.push_str(para.text.trim());
        output.push_str(":\n\n");

        self.counters.mark_numbered(index);
        Ok(())
    }

    fn append_normal(&self, output: &mut String, doc: &Document, index: usize) {
        let para = &doc.paragraphs[index];

        if heading::wants_separator(para, &self.title_pattern) {
            output.push_str(&heading::separator_line());
        }
        output.push_str(para.text.trim());
        output.push_str("\n\n");
    }
}

/// Final normalization pass: collapse the adjacency artifact where a
/// multi-line cell's `&&` terminator is immediately followed by the
/// next cell's `||` separator. Collapsing can expose another `&&||`
/// when the following cell was empty, so the substitution repeats
/// until the text stops changing.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_owned();
    loop {
        let next = out.replace("&&||", "&&");
        if next == out {
            return out;
        }
        out = next;
    }
}
