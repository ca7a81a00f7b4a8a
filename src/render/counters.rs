//! Hierarchical numbering counters.

use crate::error::{Error, Result};
use log::debug;

/// Number of supported nesting levels.
pub const MAX_LEVELS: usize = 10;

/// Maximum allowed paragraph gap between two consecutive numbered
/// paragraphs before the numbering session resets.
pub const MAX_PARAGRAPH_GAP: usize = 6;

/// Per-level numbering state for one document traversal.
///
/// At most one numbering session is active at a time: a gap of more
/// than [`MAX_PARAGRAPH_GAP`] paragraphs between numbered items zeroes
/// every counter before the next item is numbered.
#[derive(Debug, Clone, Default)]
pub struct CounterState {
    counters: [u32; MAX_LEVELS],
    last_level: usize,
    last_numbered_index: Option<usize>,
}

impl CounterState {
    /// Create fresh counter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the counters if the gap since the last numbered paragraph
    /// exceeds [`MAX_PARAGRAPH_GAP`]. Called with the current
    /// paragraph's document index before it is numbered.
    pub fn maybe_reset(&mut self, current_index: usize) {
        let Some(last) = self.last_numbered_index else {
            return;
        };
        if current_index.saturating_sub(last) > MAX_PARAGRAPH_GAP {
            debug!(
                "numbering gap {} exceeds {}, resetting counters",
                current_index - last,
                MAX_PARAGRAPH_GAP
            );
            self.counters = [0; MAX_LEVELS];
            self.last_level = 0;
        }
    }

    /// Advance the counter for a 1-based level.
    ///
    /// Returning to a level at or below the previous one zeroes every
    /// deeper counter first. A level beyond [`MAX_LEVELS`] is a hard
    /// precondition violation and aborts the conversion.
    pub fn advance(&mut self, level: usize) -> Result<()> {
        if level == 0 || level > MAX_LEVELS {
            return Err(Error::MalformedInput(format!(
                "list level {} outside supported range 1..={}",
                level, MAX_LEVELS
            )));
        }
        if level <= self.last_level {
            for counter in &mut self.counters[level..] {
                *counter = 0;
            }
        }
        self.counters[level - 1] += 1;
        self.last_level = level;
        Ok(())
    }

    /// Record the document index of the numbered paragraph just
    /// processed. Only list paragraphs are recorded; table and normal
    /// paragraphs never participate in gap detection.
    pub fn mark_numbered(&mut self, index: usize) {
        self.last_numbered_index = Some(index);
    }

    /// Dot-joined decimal path for a 1-based level, e.g. `"2.1.4"`.
    pub fn dot_path(&self, level: usize) -> String {
        let level = level.min(MAX_LEVELS);
        self.counters[..level]
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    #[cfg(test)]
    pub(crate) fn counter(&self, index: usize) -> u32 {
        self.counters[index]
    }
}
