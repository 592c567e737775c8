//! Flipboard: Entry point that wires the board actor to its sources.
//!
//! The canvas-size source and the content source call into a
//! [`Flipboard`]; renderers subscribe to it. Everything else happens on
//! the board thread.

use super::messages::{BoardCommand, BoardSnapshot, DisplayContent, GridEvent};
use super::BoardActor;
use crate::board::{BoardConfig, GridController};
use crate::error::BoardError;
use crate::layout::CanvasSize;
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// A running split-flap board.
pub struct Flipboard {
    /// Command sender.
    command_tx: Sender<BoardCommand>,
    /// Board actor handle.
    actor: Option<BoardActor>,
    /// Flip interval, used to pace settle polling.
    step_interval: Duration,
}

impl Flipboard {
    /// Start a board with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the board thread cannot be spawned.
    pub fn new() -> Result<Self, BoardError> {
        Self::with_config(BoardConfig::default())
    }

    /// Start a board with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the board thread cannot be spawned.
    pub fn with_config(config: BoardConfig) -> Result<Self, BoardError> {
        let (command_tx, command_rx) = bounded::<BoardCommand>(config.command_capacity.max(1));
        let step_interval = config.step_interval;
        let actor = BoardActor::spawn(command_rx, GridController::new(config))?;

        Ok(Self {
            command_tx,
            actor: Some(actor),
            step_interval,
        })
    }

    /// Deliver a settled canvas size.
    pub fn set_canvas_size(&self, canvas: impl Into<CanvasSize>) -> Result<(), BoardError> {
        self.send(BoardCommand::CanvasSize(canvas.into()))
    }

    /// Deliver new content.
    pub fn set_content(&self, content: DisplayContent) -> Result<(), BoardError> {
        self.send(BoardCommand::Content(content))
    }

    /// Assign text cell by cell, with no wrapping or alignment.
    pub fn set_raw_content(&self, text: impl Into<String>) -> Result<(), BoardError> {
        self.send(BoardCommand::RawContent(text.into()))
    }

    /// Subscribe to geometry and cell events.
    ///
    /// Events emitted before the subscription is registered are not
    /// replayed; use [`Flipboard::snapshot`] to catch up.
    pub fn subscribe(&self) -> Result<Receiver<GridEvent>, BoardError> {
        let (event_tx, event_rx) = unbounded();
        self.send(BoardCommand::Subscribe(event_tx))?;
        Ok(event_rx)
    }

    /// Fetch the current state of the board.
    pub fn snapshot(&self, timeout: Duration) -> Result<BoardSnapshot, BoardError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(BoardCommand::Snapshot(reply_tx))?;
        reply_rx.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => BoardError::Timeout,
            RecvTimeoutError::Disconnected => BoardError::Disconnected,
        })
    }

    /// Poll until every cell has settled on its target.
    pub fn wait_until_settled(&self, timeout: Duration) -> Result<BoardSnapshot, BoardError> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let snapshot = self.snapshot(remaining)?;
            if snapshot.is_settled() {
                return Ok(snapshot);
            }
            if Instant::now() >= deadline {
                return Err(BoardError::Timeout);
            }
            thread::sleep(self.step_interval.max(Duration::from_millis(1)));
        }
    }

    /// Stop the board thread and wait for it to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn send(&self, command: BoardCommand) -> Result<(), BoardError> {
        self.command_tx
            .send(command)
            .map_err(|_| BoardError::Disconnected)
    }

    fn stop(&mut self) {
        if let Some(actor) = self.actor.take() {
            actor.shutdown();
            // The actor also watches the flag, so a full channel is fine.
            let _ = self.command_tx.try_send(BoardCommand::Shutdown);
            actor.join();
        }
    }
}

impl Drop for Flipboard {
    fn drop(&mut self) {
        self.stop();
    }
}
