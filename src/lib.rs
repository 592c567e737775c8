//! # Flapboard
//!
//! The engine beneath a split-flap display: the kind of board that used
//! to clatter through letters at airports and railway stations.
//!
//! ## Core Concepts
//!
//! - **Rotation**: a flap only turns forward, so reaching `A` from `C`
//!   runs through the rest of the [`Alphabet`] and wraps around
//! - **Grid layout**: the canvas size decides how many cells fit
//! - **Content layout**: text is word-wrapped, aligned and padded into
//!   exactly one symbol per cell
//! - **Actor model**: one board thread owns every cell, flips them on a
//!   fixed interval, and cancels superseded sequences
//!
//! ## Example
//!
//! ```rust,no_run
//! use flapboard::{DisplayContent, Flipboard};
//!
//! let board = Flipboard::new()?;
//! let events = board.subscribe()?;
//! board.set_canvas_size((1280.0, 720.0))?;
//! board.set_content(DisplayContent::new("NOW BOARDING"))?;
//!
//! for event in events.iter() {
//!     println!("{event:?}");
//! }
//! # Ok::<(), flapboard::BoardError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod board;
pub mod buffer;
pub mod error;
pub mod layout;
pub mod rotation;

// Re-exports for convenience
pub use actor::{BoardActor, BoardCommand, BoardSnapshot, DisplayContent, Flipboard, GridEvent};
pub use board::{BoardConfig, CellAnimator, CellPhase, ChangeSet, GridController};
pub use buffer::{Alphabet, ContentBuffer, Symbol};
pub use error::{AlphabetError, BoardError};
pub use layout::{CanvasSize, GridGeometry, HorizontalAlignment, Size, VerticalAlignment};
