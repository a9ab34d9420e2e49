//! FrameLoop: the single owner of a running game.
//!
//! Both the per-frame ticker and the input handler address the same
//! `FrameLoop`, so they always see the current engine state. Each run is
//! guarded by a [`LoopHandle`]; once it is cancelled the loop stops mutating
//! the game until a new run is started.

use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, PieceSource, SimpleRng};
use crate::handle::LoopHandle;
use crate::types::Command;

/// What a call to [`FrameLoop::frame`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No live run; the game was not touched
    Stopped,
    /// Time accumulated, piece did not move
    Idle,
    /// Gravity moved or locked the piece
    Dropped,
    /// The game ended during this frame; the run has been cancelled
    GameOver,
}

#[derive(Debug)]
pub struct FrameLoop<R: PieceSource = SimpleRng> {
    game: GameState<R>,
    handle: Option<LoopHandle>,
    frames: u64,
}

impl FrameLoop<SimpleRng> {
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameState::with_seed(seed))
    }
}

impl<R: PieceSource> FrameLoop<R> {
    pub fn new(game: GameState<R>) -> Self {
        Self {
            game,
            handle: None,
            frames: 0,
        }
    }

    /// Start a fresh game and a fresh run.
    ///
    /// Any previous run is cancelled first, so handles held from it stay
    /// dead.
    pub fn start(&mut self) -> LoopHandle {
        if let Some(old) = self.handle.take() {
            old.cancel();
        }

        self.game.start();
        self.frames = 0;

        let handle = LoopHandle::new();
        self.handle = Some(handle.clone());
        info!("frame loop started");
        handle
    }

    /// Cancel the current run. Safe to call any number of times; returns
    /// true only when this call stopped a live run.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let stopped = handle.cancel();
                if stopped {
                    debug!(frames = self.frames, "frame loop stopped");
                }
                stopped
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.live_handle().is_some()
    }

    fn live_handle(&self) -> Option<&LoopHandle> {
        self.handle.as_ref().filter(|h| !h.is_cancelled())
    }

    /// Advance one display frame by `elapsed_ms`.
    ///
    /// Does nothing once the run is cancelled. When the game ends the run
    /// cancels itself so no further frames are processed.
    pub fn frame(&mut self, elapsed_ms: u32) -> FrameOutcome {
        if self.live_handle().is_none() {
            return FrameOutcome::Stopped;
        }

        self.frames += 1;
        let dropped = self.game.tick(elapsed_ms);

        if self.game.game_over() {
            self.stop();
            return FrameOutcome::GameOver;
        }

        if dropped {
            FrameOutcome::Dropped
        } else {
            FrameOutcome::Idle
        }
    }

    /// Route a player command.
    ///
    /// Start and restart begin a new run. Steering commands only reach the
    /// game while the current run is live. Returns whether the game changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        if command.is_session_command() {
            self.start();
            return true;
        }

        if self.live_handle().is_none() {
            return false;
        }

        let changed = self.game.apply_command(command);
        if self.game.game_over() {
            self.stop();
        }
        changed
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    /// Mutable engine access for scenario setup
    pub fn game_mut(&mut self) -> &mut GameState<R> {
        &mut self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Frames processed in the current run
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<R: PieceSource> Drop for FrameLoop<R> {
    fn drop(&mut self) {
        // Tear-down must not leave a live run behind for outside handles.
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}
