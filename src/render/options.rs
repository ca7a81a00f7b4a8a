//! Serialization options.

/// Options for serializing a document to markup.
#[derive(Debug, Clone, Default)]
pub struct MarkupOptions {
    /// How to handle table cells that fail to render
    pub cell_error_mode: CellErrorMode,
}

impl MarkupOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell error mode.
    pub fn with_cell_error_mode(mut self, mode: CellErrorMode) -> Self {
        self.cell_error_mode = mode;
        self
    }

    /// Abort the conversion on the first failed cell instead of
    /// substituting the error sentinel.
    pub fn strict_cells(mut self) -> Self {
        self.cell_error_mode = CellErrorMode::Strict;
        self
    }
}

/// How the assembler reacts to a table cell that fails to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellErrorMode {
    /// Replace the cell's contribution with the error sentinel and
    /// continue with the next paragraph
    #[default]
    Sentinel,
    /// Fail the whole conversion
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_sentinel() {
        let options = MarkupOptions::default();
        assert_eq!(options.cell_error_mode, CellErrorMode::Sentinel);
    }

    #[test]
    fn test_strict_cells() {
        let options = MarkupOptions::new().strict_cells();
        assert_eq!(options.cell_error_mode, CellErrorMode::Strict);
    }
}
