//! Symbol: The glyph shown on a single flap.
//!
//! # Memory Layout
//!
//! `Symbol` is `Copy` and stores its grapheme inline, so buffers of
//! symbols are flat arrays with no heap indirection:
//!
//! ```text
//! ┌──────────────────────────────┬──────┬───────┐
//! │  grapheme (UTF-8)            │ len  │ width │
//! │  [u8; 8]                     │ u8   │ u8    │
//! └──────────────────────────────┴──────┴───────┘
//! ```
//!
//! Eight bytes cover every single code point plus the common two code
//! point clusters (letter + combining mark, emoji + variation selector).
//! Longer clusters such as ZWJ families are replaced by
//! [`Symbol::REPLACEMENT`].

use std::fmt;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Bytes of inline grapheme storage.
const INLINE_CAPACITY: usize = 8;

/// A single displayable glyph: a letter, digit, space or colour tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Inline grapheme storage (UTF-8 bytes).
    grapheme: [u8; INLINE_CAPACITY],
    /// Byte length of the grapheme (1-8).
    grapheme_len: u8,
    /// Display width in terminal columns (0, 1 or 2).
    display_width: u8,
}

// Compile-time assertion: symbols stay small enough to copy freely.
const _: () = assert!(
    std::mem::size_of::<Symbol>() == 10,
    "Symbol must be exactly 10 bytes"
);

impl Default for Symbol {
    fn default() -> Self {
        Self::SPACE
    }
}

impl Symbol {
    /// The blank flap.
    pub const SPACE: Self = Self {
        grapheme: [b' ', 0, 0, 0, 0, 0, 0, 0],
        grapheme_len: 1,
        display_width: 1,
    };

    /// U+FFFD, shown for graphemes that do not fit inline storage.
    pub const REPLACEMENT: Self = Self {
        grapheme: [0xEF, 0xBF, 0xBD, 0, 0, 0, 0, 0],
        grapheme_len: 3,
        display_width: 1,
    };

    /// Create a symbol from a single character.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_char(c: char) -> Self {
        let mut grapheme = [0u8; INLINE_CAPACITY];
        // A char encodes to at most 4 bytes.
        let len = c.encode_utf8(&mut grapheme).len();
        let width = c.width().unwrap_or(0).min(2);

        Self {
            grapheme,
            grapheme_len: len as u8,
            display_width: width as u8,
        }
    }

    /// Create a symbol from exactly one grapheme cluster.
    ///
    /// Returns `None` when `s` is empty, holds more than one grapheme,
    /// or does not fit inline storage.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_grapheme(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes.len() > INLINE_CAPACITY {
            return None;
        }
        if s.graphemes(true).nth(1).is_some() {
            return None;
        }

        let mut grapheme = [0u8; INLINE_CAPACITY];
        grapheme[..bytes.len()].copy_from_slice(bytes);
        let width = s.width().min(2);

        Some(Self {
            grapheme,
            grapheme_len: bytes.len() as u8,
            display_width: width as u8,
        })
    }

    /// Like [`Symbol::from_grapheme`], falling back to [`Symbol::REPLACEMENT`].
    #[inline]
    pub fn from_grapheme_lossy(s: &str) -> Self {
        Self::from_grapheme(s).unwrap_or(Self::REPLACEMENT)
    }

    /// Get the grapheme as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Only valid UTF-8 is ever written to the inline storage.
        std::str::from_utf8(&self.grapheme[..usize::from(self.grapheme_len)]).unwrap_or("\u{FFFD}")
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Check if this is the blank flap.
    #[inline]
    pub const fn is_space(&self) -> bool {
        self.grapheme_len == 1 && self.grapheme[0] == b' '
    }
}

impl From<char> for Symbol {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

/// Split text into symbols, one per grapheme cluster.
pub fn symbols(text: &str) -> impl Iterator<Item = Symbol> + '_ {
    text.graphemes(true).map(Symbol::from_grapheme_lossy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_size() {
        assert_eq!(std::mem::size_of::<Symbol>(), 10);
    }

    #[test]
    fn test_symbol_from_char_ascii() {
        let symbol = Symbol::from_char('A');
        assert_eq!(symbol.as_str(), "A");
        assert_eq!(symbol.display_width(), 1);
    }

    #[test]
    fn test_symbol_colour_tile() {
        let tile = Symbol::from_char('🟥');
        assert_eq!(tile.as_str(), "🟥");
        assert_eq!(tile.display_width(), 2);
    }

    #[test]
    fn test_symbol_from_grapheme_fits() {
        let symbol = Symbol::from_grapheme("e\u{301}").unwrap();
        assert_eq!(symbol.as_str(), "e\u{301}");
        assert_eq!(symbol.display_width(), 1);
    }

    #[test]
    fn test_symbol_from_grapheme_rejects_multiple() {
        assert!(Symbol::from_grapheme("AB").is_none());
        assert!(Symbol::from_grapheme("").is_none());
    }

    #[test]
    fn test_symbol_from_grapheme_overflow() {
        // ZWJ family is far longer than the inline storage.
        assert!(Symbol::from_grapheme("👨‍👩‍👧").is_none());
        assert_eq!(Symbol::from_grapheme_lossy("👨‍👩‍👧"), Symbol::REPLACEMENT);
    }

    #[test]
    fn test_symbol_space() {
        assert!(Symbol::SPACE.is_space());
        assert_eq!(Symbol::default(), Symbol::from_char(' '));
        assert!(!Symbol::from_char('A').is_space());
    }

    #[test]
    fn test_symbols_iter() {
        let parsed: Vec<Symbol> = symbols("Hi 🟩").collect();
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[3].as_str(), "🟩");
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::from('Z').to_string(), "Z");
        assert_eq!(format!("{:?}", Symbol::SPACE), "Symbol(\" \")");
    }
}
