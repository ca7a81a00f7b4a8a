//! Heading separator heuristic.
//!
//! Short, title-like normal paragraphs get a visual section break: a
//! line of fifty `+` characters emitted before the paragraph text.

use crate::model::{Justification, ParagraphRecord};
use regex::Regex;

/// Width of the separator line.
pub const SEPARATOR_WIDTH: usize = 50;

/// Maximum trimmed length (in chars) for a paragraph to qualify as a
/// title.
pub const MAX_TITLE_CHARS: usize = 50;

/// Indent beyond which a paragraph counts as heading-like layout.
/// Taken from the legacy layout units of the source format.
pub const INDENT_THRESHOLD: i32 = 1_000_000;

/// Sentence terminators and decorative marks that disqualify a title.
const ENDING_MARKS: [&str; 11] = [
    "。", "！", "!", "？", "?", ";", "；", ":", "：", "...", "★",
];

/// Structural title pattern: 第 + up to three numerals + a section
/// word (章/部分/节/条/款/项).
pub(crate) fn title_pattern() -> Regex {
    Regex::new(r"^\s*第[一二三四五六七八九十0-9]{1,3}(章|部分|节|条|款|项).*$")
        .expect("title pattern is valid")
}

/// The separator line: fifty `+` characters and a newline.
pub fn separator_line() -> String {
    let mut line = "+".repeat(SEPARATOR_WIDTH);
    line.push('\n');
    line
}

/// Decide whether a normal paragraph gets a separator line before its
/// text. All three conditions must hold: short non-empty text, a
/// structural title pattern or heading-like layout, and no trailing
/// sentence terminator.
pub fn wants_separator(para: &ParagraphRecord, pattern: &Regex) -> bool {
    let trimmed = para.text.trim();

    if trimmed.is_empty() || trimmed.chars().count() > MAX_TITLE_CHARS {
        return false;
    }

    let structural = pattern.is_match(trimmed);
    let heading_layout = para.justification == Justification::Center
        || para.left_indent > INDENT_THRESHOLD
        || para.first_line_indent > INDENT_THRESHOLD;
    if !structural && !heading_layout {
        return false;
    }

    !ENDING_MARKS.iter().any(|mark| trimmed.ends_with(mark))
}
