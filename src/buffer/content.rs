//! ContentBuffer: The flattened symbols assigned to every cell.
//!
//! A buffer is produced fresh for each content or geometry change and
//! consumed once by the grid controller. Symbols are stored row-major:
//! `index = row * columns + column`.

use super::symbol::{symbols, Symbol};
use std::ops::Deref;

/// A fixed-length, space-padded sequence of symbols.
///
/// Never empty: a requested length of zero is coerced to one slot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContentBuffer {
    /// Symbol storage (row-major order).
    symbols: Vec<Symbol>,
}

impl ContentBuffer {
    /// Create a buffer of `len` blank flaps (at least one).
    pub fn blank(len: usize) -> Self {
        Self {
            symbols: vec![Symbol::SPACE; len.max(1)],
        }
    }

    /// Create a buffer from a symbol stream, truncated or space-padded
    /// to exactly `len` symbols (at least one).
    pub fn from_symbols(stream: impl IntoIterator<Item = Symbol>, len: usize) -> Self {
        let len = len.max(1);
        let mut symbols: Vec<Symbol> = stream.into_iter().take(len).collect();
        symbols.resize(len, Symbol::SPACE);
        Self { symbols }
    }

    /// Create a buffer from raw text with no wrapping or alignment.
    pub fn from_text(text: &str, len: usize) -> Self {
        Self::from_symbols(symbols(text), len)
    }

    /// Get the underlying symbol slice.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Yield `(index, symbol)` for every slot whose symbol differs from
    /// the matching entry of `targets`.
    ///
    /// Slots beyond either length are ignored.
    pub fn changed_slots<'a>(
        &'a self,
        targets: impl IntoIterator<Item = Symbol> + 'a,
    ) -> impl Iterator<Item = (usize, Symbol)> + 'a {
        self.symbols
            .iter()
            .zip(targets)
            .enumerate()
            .filter(|(_, (next, current))| *next != current)
            .map(|(index, (&next, _))| (index, next))
    }

    /// Render the buffer as one string.
    pub fn to_text(&self) -> String {
        self.symbols.iter().map(Symbol::as_str).collect()
    }
}

impl Deref for ContentBuffer {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl From<ContentBuffer> for Vec<Symbol> {
    fn from(buffer: ContentBuffer) -> Self {
        buffer.symbols
    }
}
