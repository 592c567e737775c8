//! Alphabet: The ordered, cyclic catalog of symbols a flap can show.
//!
//! A physical split-flap unit carries a fixed ring of flaps. The
//! alphabet models that ring: after the last symbol comes the first.
//! Position lookup goes through a `HashMap` so sequencing stays O(1)
//! per lookup regardless of alphabet size.

use super::symbol::{symbols, Symbol};
use crate::error::AlphabetError;
use std::collections::HashMap;

/// The flaps on the default ring, in flip order.
const DEFAULT_FLAPS: &str =
    " ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789🟥🟧🟨🟩🟦🟪🟫⬛⬜";

/// An ordered, duplicate-free, cyclic sequence of symbols.
#[derive(Clone, Debug)]
pub struct Alphabet {
    /// Symbols in flip order.
    symbols: Vec<Symbol>,
    /// Symbol -> position.
    positions: HashMap<Symbol, usize>,
}

impl Alphabet {
    /// Build an alphabet from symbols in flip order.
    ///
    /// Fails if the list is empty or contains a symbol twice.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, AlphabetError> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = positions.get(&symbol) {
                return Err(AlphabetError::Duplicate {
                    symbol,
                    first,
                    second: index,
                });
            }
            positions.insert(symbol, index);
        }

        Ok(Self { symbols, positions })
    }

    /// Build an alphabet from the graphemes of a string.
    pub fn from_graphemes(text: &str) -> Result<Self, AlphabetError> {
        Self::new(symbols(text))
    }

    /// Number of symbols on the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; construction rejects empty alphabets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of a symbol, if it is on the ring.
    #[inline]
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Check if a symbol is on the ring.
    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Symbol at a position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    /// The symbol that follows `symbol` on the ring.
    pub fn successor(&self, symbol: Symbol) -> Option<Symbol> {
        let next = (self.position(symbol)? + 1) % self.symbols.len();
        self.get(next)
    }

    /// All symbols in flip order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Default for Alphabet {
    /// Space, upper case, lower case, digits, then colour tiles.
    fn default() -> Self {
        let symbols: Vec<Symbol> = symbols(DEFAULT_FLAPS).collect();
        let positions = symbols.iter().enumerate().map(|(i, &s)| (s, i)).collect();
        Self { symbols, positions }
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}
