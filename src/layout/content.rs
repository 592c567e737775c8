//! Content: Reflow free text into the fixed grid of flaps.
//!
//! The pipeline is:
//!
//! 1. normalise `\r\n` and `\r` to `\n` and split into raw lines
//! 2. greedily word-wrap each raw line to the column count
//! 3. keep at most `rows` lines
//! 4. pad vertically with blank lines according to the vertical alignment
//! 5. pad each line to the column count according to the horizontal alignment
//! 6. flatten and truncate or pad to exactly `capacity` symbols
//!
//! Lengths are counted in grapheme clusters, one per flap. A word longer
//! than a row is kept whole and spills into the next row when flattened.

use crate::buffer::{symbols, ContentBuffer};
use unicode_segmentation::UnicodeSegmentation;

/// Horizontal placement of each line within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Pad after the text.
    #[default]
    Left,
    /// Pad before the text.
    Right,
    /// Split padding, the extra space going after the text.
    Center,
}

/// Vertical placement of the block of lines within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Blank rows after the text.
    #[default]
    Top,
    /// Blank rows before the text.
    Bottom,
    /// Split blank rows, the extra row going after the text.
    Center,
}

/// Grid dimensions and alignment for one reflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentLayout {
    /// Total number of flaps.
    pub capacity: usize,
    /// Flaps per row.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
    /// Horizontal alignment.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment.
    pub vertical: VerticalAlignment,
}

impl ContentLayout {
    /// Lay out `text` with these settings.
    pub fn apply(&self, text: &str) -> ContentBuffer {
        layout(
            text,
            self.capacity,
            self.columns,
            self.rows,
            self.horizontal,
            self.vertical,
        )
    }
}

/// Reflow `text` into a buffer of exactly `capacity` symbols.
///
/// A zero capacity or zero row count is treated as one, so the result
/// is never empty.
///
/// # Example
///
/// ```
/// use flapboard::layout::content::{layout, HorizontalAlignment, VerticalAlignment};
///
/// let buffer = layout(
///     "HELLO WORLD",
///     10,
///     5,
///     2,
///     HorizontalAlignment::Left,
///     VerticalAlignment::Top,
/// );
/// assert_eq!(buffer.to_text(), "HELLOWORLD");
/// ```
pub fn layout(
    text: &str,
    capacity: usize,
    columns: usize,
    rows: usize,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> ContentBuffer {
    let rows = rows.max(1);

    let mut lines = wrap_lines(text, columns);
    lines.truncate(rows);
    let lines = align_vertically(lines, rows, vertical);

    let flattened: String = lines
        .iter()
        .map(|line| pad_line(line, columns, horizontal))
        .collect();

    ContentBuffer::from_symbols(symbols(&flattened), capacity)
}

/// Split text into lines no longer than `columns` graphemes.
///
/// Words are separated by spaces; runs of spaces collapse. An empty raw
/// line is kept as one empty line, while a raw line holding only spaces
/// produces nothing. A single word longer than `columns` is not split.
pub fn wrap_lines(text: &str, columns: usize) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut wrapped = Vec::new();

    for raw_line in normalized.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in raw_line.split(' ').filter(|word| !word.is_empty()) {
            let word_len = grapheme_len(word);
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= columns {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                wrapped.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            wrapped.push(current);
        } else if raw_line.is_empty() {
            wrapped.push(String::new());
        }
    }

    wrapped
}

/// Pad a line with spaces to exactly `width` graphemes.
///
/// Lines already at or beyond `width` are returned unchanged.
pub fn pad_line(line: &str, width: usize, alignment: HorizontalAlignment) -> String {
    let len = grapheme_len(line);
    if len >= width {
        return line.to_string();
    }

    let missing = width - len;
    let (before, after) = match alignment {
        HorizontalAlignment::Left => (0, missing),
        HorizontalAlignment::Right => (missing, 0),
        HorizontalAlignment::Center => (missing / 2, missing - missing / 2),
    };

    let mut padded = String::with_capacity(line.len() + missing);
    padded.push_str(&" ".repeat(before));
    padded.push_str(line);
    padded.push_str(&" ".repeat(after));
    padded
}

/// Add blank lines so that exactly `rows` lines remain.
fn align_vertically(lines: Vec<String>, rows: usize, alignment: VerticalAlignment) -> Vec<String> {
    let missing = rows.saturating_sub(lines.len());
    if missing == 0 {
        return lines;
    }

    let before = match alignment {
        VerticalAlignment::Top => 0,
        VerticalAlignment::Bottom => missing,
        VerticalAlignment::Center => missing / 2,
    };

    let mut aligned = Vec::with_capacity(rows);
    aligned.resize(before, String::new());
    aligned.extend(lines);
    aligned.resize(rows, String::new());
    aligned
}

#[inline]
fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}
