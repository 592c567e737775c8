//! Layout module: Pure geometry and text reflow.
//!
//! Both engines are recomputed from scratch on every event. There is no
//! cached state here, just functions from inputs to immutable snapshots.

pub mod content;
pub mod grid;
mod size;

pub use content::{ContentLayout, HorizontalAlignment, VerticalAlignment};
pub use grid::GridGeometry;
pub use size::{CanvasSize, Size};
