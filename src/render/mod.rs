//! Paragraph-stream-to-markup serialization.

mod classify;
mod counters;
mod heading;
mod options;
mod serializer;
mod table;

pub use classify::{classify, ParagraphKind};
pub use counters::{CounterState, MAX_LEVELS, MAX_PARAGRAPH_GAP};
pub use heading::{INDENT_THRESHOLD, MAX_TITLE_CHARS, SEPARATOR_WIDTH};
pub use options::{CellErrorMode, MarkupOptions};
pub use serializer::{normalize, to_markup, to_markup_with_options, MarkupSerializer};
pub use table::{
    CELL_FILLER, CELL_SEPARATOR, ERROR_SENTINEL, LINE_BREAK_TOKEN, MULTILINE_MARK, ROW_SEPARATOR,
    TABLE_MARKER,
};
