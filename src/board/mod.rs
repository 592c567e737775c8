//! Board module: The stateful half of the engine.
//!
//! - [`CellAnimator`]: One flap, its target and its in-flight flip sequence
//! - [`GridController`]: Owns every cell and reacts to canvas and content events

mod cell;
mod controller;

pub use cell::{CellAnimator, CellPhase};
pub use controller::{BoardConfig, ChangeSet, GridController};
