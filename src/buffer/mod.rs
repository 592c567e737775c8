//! Buffer module: The symbol-level data a flip board displays.
//!
//! This module contains:
//! - [`Symbol`]: A single glyph, stored inline for cheap copies
//! - [`Alphabet`]: The cyclic ring of symbols a flap can show
//! - [`ContentBuffer`]: The fixed-length symbols assigned to all cells

mod alphabet;
mod content;
mod symbol;

pub use alphabet::Alphabet;
pub use content::ContentBuffer;
pub use symbol::{symbols, Symbol};
