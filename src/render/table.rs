//! Table linearization.
//!
//! Tables are flattened into a delimiter grammar: a table begins with
//! `\nTable:`, cells within a row are joined by `||`, rows other than
//! the table's final row end with `+++`, and rows shorter than the
//! header row are padded with `||-`. A cell whose source text spanned
//! multiple lines ends with `&&`.

use crate::error::{Error, Result};
use crate::model::ParagraphRecord;

/// Marker emitted once when a table opens.
pub const TABLE_MARKER: &str = "\nTable:";

/// Cell separator.
pub const CELL_SEPARATOR: &str = "||";

/// Row separator, emitted after every row except the table's last.
pub const ROW_SEPARATOR: &str = "+++";

/// Filler for cells missing relative to the header row.
pub const CELL_FILLER: &str = "-";

/// Terminator appended to a cell whose source text spanned lines.
pub const MULTILINE_MARK: &str = "&&";

/// Replacement token for embedded line breaks inside a cell.
pub const LINE_BREAK_TOKEN: &str = "<br>";

/// Sentinel substituted for a cell that failed to render.
pub const ERROR_SENTINEL: &str = "||ERROR||+++\n";

/// Per-table-instance serializer state.
///
/// Lifecycle: `Closed -> Open(header unknown) -> Open(header fixed) ->
/// Closed`. Transitions are driven by the caller from document
/// position; the header column count is fixed the first time a row
/// completes and stays immutable until the table closes.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    table_open: bool,
    header_column_count: Option<usize>,
    cells_in_row: usize,
}

impl TableState {
    /// Create state for one document traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a table is currently open.
    pub fn is_open(&self) -> bool {
        self.table_open
    }

    /// Header column count, once the first row has completed.
    pub fn header_column_count(&self) -> Option<usize> {
        self.header_column_count
    }
}

/// Render one table-cell paragraph into its markup segment, updating
/// table state. `opens_table` tells whether this cell is the table's
/// first (resolved by the caller from the paragraph that precedes it);
/// `is_last_row` tells whether a row ending here is the table's final
/// row (resolved from the paragraph that follows). Opening always
/// resets the row and header state, so a table whose final row never
/// completed cannot leak its state into the next one.
///
/// Any error here is recovered at cell granularity by the assembler,
/// which substitutes [`ERROR_SENTINEL`] and continues.
pub fn process_cell(
    state: &mut TableState,
    para: &ParagraphRecord,
    opens_table: bool,
    is_last_row: bool,
) -> Result<String> {
    if !para.in_table {
        return Err(Error::CellRender(
            "paragraph dispatched as table cell is not in a table".into(),
        ));
    }

    let mut segment = String::new();

    if opens_table {
        segment.push_str(TABLE_MARKER);
        state.table_open = true;
        state.header_column_count = None;
        state.cells_in_row = 0;
    }

    // Only breaks inside the trimmed text count; a trailing newline is
    // ordinary outer whitespace, not a multi-line cell.
    let multiline = para.text.trim().contains(['\n', '\r']);

    segment.push_str(CELL_SEPARATOR);
    segment.push_str(&clean_cell_content(&para.text));
    if multiline {
        segment.push_str(MULTILINE_MARK);
    }
    state.cells_in_row += 1;

    if para.is_table_row_end {
        finish_row(state, &mut segment, is_last_row);
    }

    Ok(segment)
}

/// Complete the current row: fix the header column count on the first
/// completed row, pad missing trailing cells, then either emit the row
/// separator or close the table.
fn finish_row(state: &mut TableState, segment: &mut String, is_last_row: bool) {
    let header = match state.header_column_count {
        Some(count) => count,
        None => {
            state.header_column_count = Some(state.cells_in_row);
            state.cells_in_row
        }
    };

    while state.cells_in_row < header {
        segment.push_str(CELL_SEPARATOR);
        segment.push_str(CELL_FILLER);
        state.cells_in_row += 1;
    }
    state.cells_in_row = 0;

    if is_last_row {
        state.table_open = false;
        state.header_column_count = None;
    } else {
        segment.push_str(ROW_SEPARATOR);
    }
}

/// Normalize one cell's text for the linear grammar: trim, replace
/// embedded line breaks with [`LINE_BREAK_TOKEN`], collapse whitespace
/// runs to a single space, and escape the two sequences that collide
/// with the grammar's own delimiters.
///
/// An all-whitespace cell renders as the empty string; the filler dash
/// is reserved for row padding.
fn clean_cell_content(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let with_breaks = trimmed
        .replace("\r\n", LINE_BREAK_TOKEN)
        .replace(['\n', '\r'], LINE_BREAK_TOKEN);

    let collapsed = collapse_whitespace(&with_breaks);

    collapsed.replace("||", "│").replace("+++", "＋")
}

/// Collapse every run of whitespace into one ASCII space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
