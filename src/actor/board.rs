//! Board Actor: Dedicated thread that owns the grid controller.
//!
//! All cell state lives on this thread. Commands arrive over a channel;
//! between commands the thread sleeps until the next flip is due, then
//! commits every due flip. Because supersession and stepping both happen
//! here, a stale step can never land after a newer target.

use super::messages::BoardCommand;
use crate::board::GridController;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Board actor that drives cell animations.
pub struct BoardActor {
    /// Handle to the board thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl BoardActor {
    /// Spawn the board actor thread.
    ///
    /// # Arguments
    ///
    /// * `receiver` - Channel to receive board commands from.
    /// * `controller` - The controller to drive; moved onto the thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread.
    pub fn spawn(receiver: Receiver<BoardCommand>, controller: GridController) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("flapboard-board".to_string())
            .spawn(move || {
                Self::run_loop(&receiver, &shutdown_clone, controller);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the board thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Check if the board thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the board thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("board thread panicked");
            }
        }
    }

    /// Main board loop.
    fn run_loop(receiver: &Receiver<BoardCommand>, shutdown: &AtomicBool, mut controller: GridController) {
        let idle_poll = controller.config().idle_poll;
        tracing::info!("board actor started");

        loop {
            // Check for shutdown
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Sleep until the next flip is due, or until a command arrives
            let deadline = controller
                .next_deadline()
                .unwrap_or_else(|| Instant::now() + idle_poll);

            match receiver.recv_deadline(deadline) {
                Ok(BoardCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Ok(command) => Self::apply(&mut controller, command),
                Err(RecvTimeoutError::Timeout) => {}
            }

            controller.advance(Instant::now());
        }

        tracing::info!(stepping = controller.stepping(), "board actor stopped");
    }

    /// Apply one command to the controller.
    fn apply(controller: &mut GridController, command: BoardCommand) {
        let now = Instant::now();
        match command {
            BoardCommand::CanvasSize(canvas) => {
                let changes = controller.handle_canvas_size(canvas, now);
                tracing::debug!(?canvas, ?changes, "canvas size");
            }
            BoardCommand::Content(content) => {
                let changes = controller.handle_content(content, now);
                tracing::debug!(?changes, "content");
            }
            BoardCommand::RawContent(text) => {
                let changes = controller.set_raw_content(text, now);
                tracing::debug!(?changes, "raw content");
            }
            BoardCommand::Subscribe(subscriber) => controller.add_subscriber(subscriber),
            BoardCommand::Snapshot(reply) => {
                // The requester may have timed out and gone away.
                let _ = reply.send(controller.snapshot());
            }
            BoardCommand::Shutdown => {
                tracing::warn!("shutdown command reached apply");
            }
        }
    }
}

impl Drop for BoardActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::DisplayContent;
    use crate::board::BoardConfig;
    use crate::layout::Size;
    use crossbeam_channel::bounded;
    use std::time::Duration;

    fn fast_controller() -> GridController {
        GridController::new(BoardConfig {
            base_cell_size: Size::new(1.0, 1.0),
            base_spacing: 0.0,
            step_interval: Duration::from_millis(1),
            idle_poll: Duration::from_millis(5),
            ..BoardConfig::default()
        })
    }

    #[test]
    fn test_board_actor_snapshot() {
        let (tx, rx) = bounded(16);
        let actor = BoardActor::spawn(rx, fast_controller()).unwrap();

        tx.send(BoardCommand::CanvasSize(Size::new(4.0, 2.0))).unwrap();
        let (reply_tx, reply_rx) = bounded(1);
        tx.send(BoardCommand::Snapshot(reply_tx)).unwrap();

        let snapshot = reply_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(snapshot.geometry.capacity(), 8);
        assert_eq!(snapshot.symbols.len(), 8);

        actor.join();
    }

    #[test]
    fn test_board_actor_flips() {
        let (tx, rx) = bounded(16);
        let actor = BoardActor::spawn(rx, fast_controller()).unwrap();

        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        tx.send(BoardCommand::Subscribe(event_tx)).unwrap();
        tx.send(BoardCommand::CanvasSize(Size::new(1.0, 1.0))).unwrap();
        tx.send(BoardCommand::Content(DisplayContent::new("C"))).unwrap();

        // Space -> A -> B -> C on the default ring.
        let mut flips = String::new();
        while let Ok(event) = event_rx.recv_timeout(Duration::from_secs(1)) {
            if let crate::actor::GridEvent::CellUpdated { symbol, .. } = event {
                flips.push_str(symbol.as_str());
                if symbol.as_str() == "C" {
                    break;
                }
            }
        }
        assert_eq!(flips, "ABC");

        actor.join();
    }

    #[test]
    fn test_board_actor_shutdown_command() {
        let (tx, rx) = bounded(16);
        let actor = BoardActor::spawn(rx, fast_controller()).unwrap();

        tx.send(BoardCommand::Shutdown).unwrap();
        let start = Instant::now();
        while !actor.is_finished() && start.elapsed() < Duration::from_secs(1) {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(actor.is_finished());
        actor.join();
    }

    #[test]
    fn test_board_actor_exits_when_senders_dropped() {
        let (tx, rx) = bounded::<BoardCommand>(16);
        let actor = BoardActor::spawn(rx, fast_controller()).unwrap();
        drop(tx);
        actor.join();
    }
}
