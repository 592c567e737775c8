//! GridController: Owns every cell and keeps them in step with the
//! canvas and the content.
//!
//! The controller is a synchronous state machine. Time is passed in
//! explicitly, which keeps it deterministic under test; the
//! [`BoardActor`](crate::actor::BoardActor) drives it from a thread.
//!
//! ```text
//!   CanvasSize ──▶ grid::layout ──▶ resize pool ─┐
//!                                                ├──▶ content::layout ──▶ retarget changed cells
//!   DisplayContent ─────────────────────────────┘
//!
//!   advance(now) ──▶ step due cells ──▶ GridEvent::CellUpdated
//! ```

use super::cell::{CellAnimator, CellPhase};
use crate::actor::{BoardSnapshot, DisplayContent, GridEvent};
use crate::buffer::{Alphabet, ContentBuffer, Symbol};
use crate::layout::{grid, CanvasSize, ContentLayout, GridGeometry, Size};
use bitflags::bitflags;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::{Duration, Instant};

/// Configuration for a board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Minimum cell size at scale 1.
    pub base_cell_size: Size,
    /// Spacing between cells at scale 1.
    pub base_spacing: f64,
    /// Pause between consecutive flips of one cell.
    pub step_interval: Duration,
    /// The ring of symbols every flap carries.
    pub alphabet: Alphabet,
    /// Capacity of the actor's command channel.
    pub command_capacity: usize,
    /// How long an idle actor waits before re-checking for shutdown.
    pub idle_poll: Duration,
}

impl BoardConfig {
    /// Minimum cell size at the given content scale.
    pub fn min_cell_size(&self, scale: f64) -> Size {
        self.base_cell_size.scaled(scale)
    }

    /// Spacing at the given content scale.
    pub fn spacing(&self, scale: f64) -> f64 {
        self.base_spacing * scale
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_cell_size: Size::new(14.0, 18.0),
            base_spacing: 5.0,
            step_interval: Duration::from_millis(30),
            alphabet: Alphabet::default(),
            command_capacity: 64,
            idle_poll: Duration::from_millis(50),
        }
    }
}

bitflags! {
    /// What an event changed on the board.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChangeSet: u8 {
        /// The geometry snapshot changed, including a canvas-only change
        /// that leaves the cells where they were.
        const GEOMETRY = 0b0000_0001;
        /// The number of cells changed.
        const CAPACITY = 0b0000_0010;
        /// At least one cell got a new target.
        const CONTENT = 0b0000_0100;
    }
}

impl std::fmt::Debug for ChangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// The root of the board: geometry, content and one animator per cell.
pub struct GridController {
    /// Configuration.
    config: BoardConfig,
    /// Last settled canvas size.
    canvas: CanvasSize,
    /// Last content received.
    content: DisplayContent,
    /// Text assigned verbatim, overriding `content.text` until new content arrives.
    raw_text: Option<String>,
    /// Current geometry.
    geometry: GridGeometry,
    /// One animator per cell, row-major.
    cells: Vec<CellAnimator>,
    /// Event subscribers.
    subscribers: Vec<Sender<GridEvent>>,
}

impl GridController {
    /// Create a controller with no canvas and no content.
    pub fn new(config: BoardConfig) -> Self {
        let spacing = config.spacing(1.0);
        Self {
            config,
            canvas: Size::ZERO,
            content: DisplayContent::default(),
            raw_text: None,
            geometry: GridGeometry::empty(Size::ZERO, spacing),
            cells: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Get the configuration.
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get the current geometry.
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Get the last content received.
    pub const fn content(&self) -> &DisplayContent {
        &self.content
    }

    /// Get the cells, row-major.
    pub fn cells(&self) -> &[CellAnimator] {
        &self.cells
    }

    /// Symbols currently shown, row-major.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.cells.iter().map(CellAnimator::current).collect()
    }

    /// Number of cells still flipping.
    pub fn stepping(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.phase() == CellPhase::Stepping)
            .count()
    }

    /// Check if every cell has settled on its target.
    pub fn is_idle(&self) -> bool {
        self.stepping() == 0
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            geometry: self.geometry,
            symbols: self.symbols(),
            stepping: self.stepping(),
        }
    }

    /// Open a new event subscription.
    pub fn subscribe(&mut self) -> Receiver<GridEvent> {
        let (tx, rx) = unbounded();
        self.add_subscriber(tx);
        rx
    }

    /// Register an existing sender as a subscriber.
    pub fn add_subscriber(&mut self, subscriber: Sender<GridEvent>) {
        self.subscribers.push(subscriber);
    }

    /// Handle a settled canvas size.
    ///
    /// Re-derives the geometry; if it changed, the cell pool is resized
    /// and the content is reflowed onto the new grid.
    pub fn handle_canvas_size(&mut self, canvas: CanvasSize, now: Instant) -> ChangeSet {
        self.canvas = if canvas.is_measurable() { canvas } else { Size::ZERO };

        let mut changes = self.relayout();
        if changes.contains(ChangeSet::GEOMETRY) {
            changes |= self.refresh(now);
        }
        changes
    }

    /// Handle new content.
    ///
    /// The scale may change the geometry, so the grid is re-derived before
    /// the text is laid out.
    pub fn handle_content(&mut self, content: DisplayContent, now: Instant) -> ChangeSet {
        self.content = content;
        self.raw_text = None;

        let mut changes = self.relayout();
        changes |= self.refresh(now);
        changes
    }

    /// Assign text cell by cell, skipping wrapping and alignment.
    ///
    /// The text is truncated or space-padded to the number of cells and
    /// stays in effect across resizes until new content arrives.
    pub fn set_raw_content(&mut self, text: impl Into<String>, now: Instant) -> ChangeSet {
        self.raw_text = Some(text.into());
        self.refresh(now)
    }

    /// Commit every flip that is due at `now`.
    ///
    /// Returns the number of cells that flipped.
    pub fn advance(&mut self, now: Instant) -> usize {
        let interval = self.config.step_interval;
        let updates: Vec<GridEvent> = self
            .cells
            .iter_mut()
            .filter_map(|cell| {
                cell.step(now, interval).map(|symbol| GridEvent::CellUpdated {
                    index: cell.index(),
                    symbol,
                })
            })
            .collect();

        let flipped = updates.len();
        for event in updates {
            self.emit(event);
        }
        flipped
    }

    /// The earliest instant at which some cell is due to flip.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.cells.iter().filter_map(CellAnimator::next_due).min()
    }

    /// Re-derive the geometry and resize the cell pool to match.
    fn relayout(&mut self) -> ChangeSet {
        let scale = self.content.scale;
        let geometry = grid::layout(
            self.canvas,
            self.config.min_cell_size(scale),
            self.config.spacing(scale),
        );
        if geometry == self.geometry {
            return ChangeSet::empty();
        }

        let mut changes = ChangeSet::GEOMETRY;
        let capacity = geometry.capacity();
        if capacity != self.cells.len() {
            // Dropping a trailing cell drops its in-flight sequence with it.
            self.cells.truncate(capacity);
            let grown = self.cells.len()..capacity;
            self.cells.extend(grown.map(CellAnimator::new));
            changes |= ChangeSet::CAPACITY;
        }

        tracing::debug!(%geometry, ?changes, "geometry changed");
        self.geometry = geometry;
        self.emit(GridEvent::GeometryChanged(geometry));
        changes
    }

    /// Lay out the current content and retarget the cells it changes.
    fn refresh(&mut self, now: Instant) -> ChangeSet {
        let buffer = self.reflow();
        let changed: Vec<(usize, Symbol)> = buffer
            .changed_slots(self.cells.iter().map(CellAnimator::target))
            .collect();
        if changed.is_empty() {
            return ChangeSet::empty();
        }

        let alphabet = &self.config.alphabet;
        for &(index, symbol) in &changed {
            self.cells[index].retarget(symbol, alphabet, now);
        }
        tracing::debug!(
            retargeted = changed.len(),
            cells = self.cells.len(),
            "content reflowed"
        );
        ChangeSet::CONTENT
    }

    /// Build the content buffer for the current geometry.
    fn reflow(&self) -> ContentBuffer {
        let capacity = self.geometry.capacity();
        match &self.raw_text {
            Some(text) => ContentBuffer::from_text(text, capacity),
            None => ContentLayout {
                capacity,
                columns: self.geometry.columns,
                rows: self.geometry.rows,
                horizontal: self.content.horizontal,
                vertical: self.content.vertical,
            }
            .apply(&self.content.text),
        }
    }

    /// Publish an event, pruning subscribers that have gone away.
    fn emit(&mut self, event: GridEvent) {
        self.subscribers.retain(|subscriber| {
            let alive = subscriber.send(event).is_ok();
            if !alive {
                tracing::warn!("subscriber disconnected");
            }
            alive
        });
    }
}
