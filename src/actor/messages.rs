//! Message types for actor communication.
//!
//! These types define the protocol between the board actor, the content
//! and canvas sources that feed it, and the renderers that consume it.

use crate::buffer::Symbol;
use crate::layout::{CanvasSize, GridGeometry, HorizontalAlignment, VerticalAlignment};
use crossbeam_channel::Sender;

/// What the board should say, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayContent {
    /// The message; line breaks start new rows.
    pub text: String,
    /// Placement of each line within its row.
    pub horizontal: HorizontalAlignment,
    /// Placement of the lines within the grid.
    pub vertical: VerticalAlignment,
    /// Multiplier on the minimum cell size and spacing.
    pub scale: f64,
}

impl DisplayContent {
    /// Top-left aligned text at scale 1.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set both alignments (builder pattern).
    #[must_use]
    pub fn with_alignment(
        mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    /// Set the scale (builder pattern).
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for DisplayContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            horizontal: HorizontalAlignment::Left,
            vertical: VerticalAlignment::Top,
            scale: 1.0,
        }
    }
}

/// Notifications published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridEvent {
    /// The grid was re-derived from a new canvas size or scale and
    /// differs from the previous one, if only in its canvas.
    GeometryChanged(GridGeometry),

    /// A cell flipped to a new symbol.
    CellUpdated {
        /// Row-major cell index.
        index: usize,
        /// The symbol now shown.
        symbol: Symbol,
    },
}

/// Commands sent to the board thread.
#[derive(Debug)]
pub enum BoardCommand {
    /// The drawable area settled on a new size.
    CanvasSize(CanvasSize),

    /// New content to lay out and display.
    Content(DisplayContent),

    /// Text to assign cell by cell with no wrapping or alignment.
    RawContent(String),

    /// Register a subscriber for [`GridEvent`]s.
    Subscribe(Sender<GridEvent>),

    /// Reply with the current state of the board.
    Snapshot(Sender<BoardSnapshot>),

    /// Shutdown the board thread.
    Shutdown,
}

/// A point-in-time copy of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    /// Current geometry.
    pub geometry: GridGeometry,
    /// Symbol shown by each cell, row-major.
    pub symbols: Vec<Symbol>,
    /// Number of cells still flipping.
    pub stepping: usize,
}

impl BoardSnapshot {
    /// Check if every cell has settled.
    pub const fn is_settled(&self) -> bool {
        self.stepping == 0
    }

    /// The shown symbols, one string per row.
    pub fn rows(&self) -> Vec<String> {
        if self.geometry.columns == 0 {
            return Vec::new();
        }
        self.symbols
            .chunks(self.geometry.columns)
            .map(|row| row.iter().map(Symbol::as_str).collect())
            .collect()
    }
}
