//! Error types.
//!
//! The layout and sequencing algorithms never fail; every degenerate input
//! has a defined fallback. Errors only arise when building an alphabet
//! and when talking to the board actor.

use crate::buffer::Symbol;
use std::io;
use thiserror::Error;

/// Errors raised while building an [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The alphabet has no symbols.
    #[error("alphabet must contain at least one symbol")]
    Empty,

    /// The same symbol appears twice.
    #[error("symbol {symbol} appears at positions {first} and {second}")]
    Duplicate {
        /// The repeated symbol.
        symbol: Symbol,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },
}

/// Errors raised by the [`Flipboard`](crate::Flipboard) facade.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The OS refused to spawn the board thread.
    #[error("failed to spawn board thread: {0}")]
    Spawn(#[from] io::Error),

    /// The board thread has stopped.
    #[error("board actor disconnected")]
    Disconnected,

    /// The board thread did not answer in time.
    #[error("board actor did not respond in time")]
    Timeout,
}
