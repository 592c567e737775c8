//! CellAnimator: One flap and its in-flight flip sequence.
//!
//! # State Machine
//!
//! ```text
//!            retarget (path non-empty)
//!   ┌──────┐ ─────────────────────────▶ ┌──────────┐
//!   │ Idle │                            │ Stepping │ ◀─┐ retarget
//!   └──────┘ ◀───────────────────────── └──────────┘ ──┘ (supersede)
//!              last step committed
//! ```
//!
//! Every retarget bumps the cell's generation. A sequence carries the
//! generation it was started with and may only commit a step while that
//! generation is still current, so a superseded sequence can never
//! overwrite the symbol of a newer target.

use crate::buffer::{Alphabet, Symbol};
use crate::rotation;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Whether a cell is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellPhase {
    /// Showing its target, nothing scheduled.
    Idle,
    /// Flipping towards its target.
    Stepping,
}

/// A scheduled run of flips towards one target.
#[derive(Debug, Clone)]
struct FlipSequence {
    /// Generation of the cell when this sequence started.
    generation: u64,
    /// Symbols still to show, in order.
    steps: VecDeque<Symbol>,
    /// When the next step may commit.
    due: Instant,
}

/// A single grid slot: its displayed symbol, its target, and at most one
/// active flip sequence.
#[derive(Debug, Clone)]
pub struct CellAnimator {
    /// Row-major position in the grid.
    index: usize,
    /// Symbol currently shown.
    current: Symbol,
    /// Symbol the cell is converging on.
    target: Symbol,
    /// Incremented on every retarget.
    generation: u64,
    /// In-flight sequence, if stepping.
    active: Option<FlipSequence>,
}

impl CellAnimator {
    /// Create an idle cell showing a blank flap.
    pub const fn new(index: usize) -> Self {
        Self::with_symbol(index, Symbol::SPACE)
    }

    /// Create an idle cell showing `symbol`.
    pub const fn with_symbol(index: usize, symbol: Symbol) -> Self {
        Self {
            index,
            current: symbol,
            target: symbol,
            generation: 0,
            active: None,
        }
    }

    /// Row-major position in the grid.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Symbol currently shown.
    #[inline]
    pub const fn current(&self) -> Symbol {
        self.current
    }

    /// Symbol the cell is converging on.
    #[inline]
    pub const fn target(&self) -> Symbol {
        self.target
    }

    /// Number of retargets so far.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Current phase.
    #[inline]
    pub const fn phase(&self) -> CellPhase {
        if self.active.is_some() {
            CellPhase::Stepping
        } else {
            CellPhase::Idle
        }
    }

    /// Flips left in the active sequence.
    pub fn remaining(&self) -> usize {
        self.active.as_ref().map_or(0, |sequence| sequence.steps.len())
    }

    /// When the next step is due, if stepping.
    pub fn next_due(&self) -> Option<Instant> {
        self.active.as_ref().map(|sequence| sequence.due)
    }

    /// Point the cell at a new target.
    ///
    /// Any in-flight sequence is dropped and a new one is planned from the
    /// symbol currently shown, not from where the old sequence started.
    /// The first step is due immediately. Returns `true` if the cell has
    /// flips to make.
    pub fn retarget(&mut self, target: Symbol, alphabet: &Alphabet, now: Instant) -> bool {
        self.generation += 1;
        self.target = target;

        let steps = rotation::sequence(self.current, target, alphabet);
        tracing::trace!(
            cell = self.index,
            from = %self.current,
            to = %target,
            flips = steps.len(),
            generation = self.generation,
            "retarget"
        );

        self.active = if steps.is_empty() {
            None
        } else {
            Some(FlipSequence {
                generation: self.generation,
                steps: steps.into(),
                due: now,
            })
        };
        self.active.is_some()
    }

    /// Drop the in-flight sequence, leaving the shown symbol as the target.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.active = None;
        self.target = self.current;
    }

    /// Commit the next flip if it is due.
    ///
    /// Returns the newly shown symbol. The following step becomes due one
    /// `interval` after `now`; after the last step the cell goes idle.
    pub fn step(&mut self, now: Instant, interval: Duration) -> Option<Symbol> {
        let sequence = self.active.as_mut()?;
        if sequence.generation != self.generation {
            self.active = None;
            return None;
        }
        if now < sequence.due {
            return None;
        }

        let Some(symbol) = sequence.steps.pop_front() else {
            self.active = None;
            return None;
        };
        self.current = symbol;

        if sequence.steps.is_empty() {
            self.active = None;
        } else {
            sequence.due = now + interval;
        }
        Some(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(30);

    fn board() -> Alphabet {
        Alphabet::from_graphemes(" ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap()
    }

    /// Step until idle, collecting every symbol shown.
    fn run(cell: &mut CellAnimator, mut now: Instant) -> String {
        let mut shown = String::new();
        while cell.phase() == CellPhase::Stepping {
            if let Some(symbol) = cell.step(now, INTERVAL) {
                shown.push_str(symbol.as_str());
            }
            now += INTERVAL;
        }
        shown
    }

    #[test]
    fn test_new_cell_is_idle_blank() {
        let cell = CellAnimator::new(3);
        assert_eq!(cell.index(), 3);
        assert_eq!(cell.current(), Symbol::SPACE);
        assert_eq!(cell.target(), Symbol::SPACE);
        assert_eq!(cell.phase(), CellPhase::Idle);
        assert_eq!(cell.next_due(), None);
    }

    #[test]
    fn test_retarget_steps_to_target() {
        let alphabet = board();
        let now = Instant::now();
        let mut cell = CellAnimator::new(0);

        assert!(cell.retarget(Symbol::from('C'), &alphabet, now));
        assert_eq!(cell.phase(), CellPhase::Stepping);
        assert_eq!(cell.remaining(), 3);
        assert_eq!(run(&mut cell, now), "ABC");
        assert_eq!(cell.current(), Symbol::from('C'));
        assert_eq!(cell.phase(), CellPhase::Idle);
    }

    #[test]
    fn test_retarget_same_symbol_stays_idle() {
        let mut cell = CellAnimator::new(0);
        assert!(!cell.retarget(Symbol::SPACE, &board(), Instant::now()));
        assert_eq!(cell.phase(), CellPhase::Idle);
    }

    #[test]
    fn test_step_waits_for_interval() {
        let alphabet = board();
        let now = Instant::now();
        let mut cell = CellAnimator::new(0);
        cell.retarget(Symbol::from('B'), &alphabet, now);

        assert_eq!(cell.step(now, INTERVAL), Some(Symbol::from('A')));
        assert_eq!(cell.step(now + Duration::from_millis(10), INTERVAL), None);
        assert_eq!(cell.current(), Symbol::from('A'));
        assert_eq!(cell.step(now + INTERVAL, INTERVAL), Some(Symbol::from('B')));
        assert_eq!(cell.phase(), CellPhase::Idle);
    }

    #[test]
    fn test_supersede_before_first_step() {
        let alphabet = board();
        let now = Instant::now();
        let mut cell = CellAnimator::new(0);

        cell.retarget(Symbol::from('X'), &alphabet, now);
        cell.retarget(Symbol::from('B'), &alphabet, now);

        // Nothing from the path to X may show.
        assert_eq!(run(&mut cell, now), "AB");
        assert_eq!(cell.current(), Symbol::from('B'));
    }

    #[test]
    fn test_supersede_restarts_from_shown_symbol() {
        let alphabet = board();
        let now = Instant::now();
        let mut cell = CellAnimator::new(0);

        cell.retarget(Symbol::from('Z'), &alphabet, now);
        cell.step(now, INTERVAL);
        cell.step(now + INTERVAL, INTERVAL);
        assert_eq!(cell.current(), Symbol::from('B'));

        // Going back to A from B means wrapping forward.
        let later = now + INTERVAL * 2;
        cell.retarget(Symbol::from('A'), &alphabet, later);
        assert_eq!(cell.remaining(), 26);
        let shown = run(&mut cell, later);
        assert!(shown.starts_with("CDE"));
        assert!(shown.ends_with("Z A"));
        assert_eq!(cell.current(), cell.target());
    }

    #[test]
    fn test_cancel() {
        let alphabet = board();
        let now = Instant::now();
        let mut cell = CellAnimator::new(0);

        cell.retarget(Symbol::from('D'), &alphabet, now);
        cell.step(now, INTERVAL);
        cell.cancel();

        assert_eq!(cell.phase(), CellPhase::Idle);
        assert_eq!(cell.target(), Symbol::from('A'));
        assert_eq!(cell.step(now + INTERVAL, INTERVAL), None);
    }

    #[test]
    fn test_generation_increments() {
        let alphabet = board();
        let now = Instant::now();
        let mut cell = CellAnimator::new(0);
        cell.retarget(Symbol::from('A'), &alphabet, now);
        cell.retarget(Symbol::from('B'), &alphabet, now);
        assert_eq!(cell.generation(), 2);
    }
}
