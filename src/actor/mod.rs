//! Actor Model: Message-passing concurrency for the board.
//!
//! A single board thread owns every cell. Sources and renderers talk to
//! it over crossbeam channels:
//!
//! ```text
//! ┌──────────────┐   BoardCommand    ┌──────────────┐    GridEvent     ┌──────────────┐
//! │ Canvas size  │ ────────────────▶ │              │ ───────────────▶ │   Renderer   │
//! └──────────────┘                   │ Board Thread │                  └──────────────┘
//! ┌──────────────┐   BoardCommand    │ (controller) │
//! │   Content    │ ────────────────▶ │              │
//! └──────────────┘                   └──────────────┘
//! ```
//!
//! Within one cell, flips are strictly ordered. Across cells there is no
//! ordering; due flips are committed in index order on each wakeup.

mod board;
mod engine;
mod messages;

pub use board::BoardActor;
pub use engine::Flipboard;
pub use messages::{BoardCommand, BoardSnapshot, DisplayContent, GridEvent};
