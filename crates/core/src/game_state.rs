//! Game state module - manages the complete game state
//!
//! This module ties together the board, the piece catalog, collision,
//! rotation, scoring and the piece source. It handles gravity timing, piece
//! movement, locking, line clears and the session lifecycle.
//!
//! None of the operations fail: a blocked move or rotation is reported as
//! `false` and leaves the state untouched. Game over is an ordinary session
//! transition triggered only by a spawn that collides.

use tracing::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::{piece_def, spawn_offset};
use crate::rng::{PieceSource, SimpleRng};
use crate::rotation::rotate;
use crate::scoring::line_clear_score;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Color, Command, Direction, Offset, PieceKind, SessionState, DROP_INTERVAL_MS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current occupancy grid, possibly rotated away from the catalog's
    pub shape: Shape,
    pub color: Color,
    pub offset: Offset,
}

impl ActivePiece {
    /// Create a piece of `kind` centered on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let def = piece_def(kind);
        Self {
            kind,
            shape: def.shape,
            color: def.color,
            offset: spawn_offset(&def.shape),
        }
    }

    /// Check the piece against walls, floor and locked blocks
    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.shape, board, self.offset)
    }

    /// Same piece at another offset
    pub fn at(&self, offset: Offset) -> Self {
        Self { offset, ..*self }
    }
}

/// Complete game state
///
/// The piece source is a type parameter so tests can script spawns; the
/// default is the seeded [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct GameState<R: PieceSource = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    lines: u32,
    session: SessionState,
    drop_timer_ms: u32,
    pieces: R,
}

impl GameState<SimpleRng> {
    /// Create a new game drawing pieces uniformly from a seeded RNG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: PieceSource> GameState<R> {
    /// Create a game in the not-started state
    pub fn new(pieces: R) -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            lines: 0,
            session: SessionState::NotStarted,
            drop_timer_ms: 0,
            pieces,
        }
    }

    /// Reset board, score and timers, enter the running state and spawn the
    /// first piece
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.session = SessionState::Running;
        info!("game started");
        self.spawn();
    }

    /// Same as [`GameState::start`]; accepted from any session state
    pub fn restart(&mut self) {
        self.start();
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_running(&self) -> bool {
        self.session == SessionState::Running
    }

    pub fn game_over(&self) -> bool {
        self.session == SessionState::Over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up scenarios (tests, replays)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Time accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn pieces(&self) -> &R {
        &self.pieces
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.landing_offset().map(|o| o.y);
        out.score = self.score;
        out.lines = self.lines;
        out.session = self.session;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Draw the next kind and place it centered on row 0.
    ///
    /// If it collides with the board the session ends and no piece is
    /// installed. Returns whether a piece was installed. Does nothing once the
    /// session is over.
    pub fn spawn(&mut self) -> bool {
        if self.session == SessionState::Over {
            return false;
        }

        let kind = self.pieces.next_kind();
        let piece = ActivePiece::spawn(kind);

        if piece.collides(&self.board) {
            self.active = None;
            self.session = SessionState::Over;
            info!(score = self.score, lines = self.lines, "game over");
            return false;
        }

        debug!(kind = kind.as_str(), x = piece.offset.x, "spawned piece");
        self.active = Some(piece);
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds [`DROP_INTERVAL_MS`] the accumulator
    /// resets and the piece moves down one row, locking if it cannot. Returns
    /// whether a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.session != SessionState::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= DROP_INTERVAL_MS {
            return false;
        }

        self.drop_timer_ms = 0;
        self.try_move(0, 1);
        true
    }

    /// Translate the active piece by (dx, dy) if the target is free.
    ///
    /// Pieces never move up, and a target offset outside the `i8` range is
    /// rejected. A blocked downward move locks the piece, resolves line
    /// clears and spawns the next one.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.session != SessionState::Running || dy < 0 {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let Some(target) = active.offset.translated(dx, dy) else {
            return false;
        };

        let moved = active.at(target);
        if target.y >= 0 && !moved.collides(&self.board) {
            self.active = Some(moved);
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Rotate the active piece in place; rejected if the rotated grid collides.
    pub fn rotate_active(&mut self, direction: Direction) -> bool {
        if self.session != SessionState::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            shape: rotate(&active.shape, direction),
            ..active
        };
        if rotated.collides(&self.board) {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Offset the active piece would come to rest at if dropped straight down
    pub fn landing_offset(&self) -> Option<Offset> {
        let active = self.active?;
        let mut offset = active.offset;
        while let Some(next) = offset.translated(0, 1) {
            if collides(&active.shape, &self.board, next) {
                break;
            }
            offset = next;
        }
        Some(offset)
    }

    /// Drop the active piece to its landing offset and lock it immediately.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if self.session != SessionState::Running {
            return 0;
        }
        let (Some(active), Some(landing)) = (self.active, self.landing_offset()) else {
            return 0;
        };

        let distance = u32::from(landing.y.abs_diff(active.offset.y));
        self.active = Some(active.at(landing));
        self.lock_piece();
        distance
    }

    /// Write the active piece into the board, clear full rows, score them and
    /// spawn the next piece
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_shape(&active.shape, active.offset, active.color);

        let cleared = self.board.clear_full_rows();
        let lines = cleared.len() as u32;
        if lines > 0 {
            let gained = line_clear_score(lines);
            self.score = self.score.saturating_add(gained);
            self.lines = self.lines.saturating_add(lines);
            debug!(lines, gained, score = self.score, "rows cleared");
        }

        self.drop_timer_ms = 0;
        self.spawn();
    }

    /// Apply an abstract player command.
    ///
    /// Start and restart are always honoured; everything else is ignored
    /// unless the game is running. Returns whether the state changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => {
                // A blocked soft drop still changes state: the piece locks.
                let had_piece = self.active.is_some() && self.is_running();
                self.try_move(0, 1) || had_piece
            }
            Command::Rotate => self.rotate_active(Direction::Clockwise),
            Command::RotateCcw => self.rotate_active(Direction::CounterClockwise),
            Command::HardDrop => {
                let had_piece = self.active.is_some() && self.is_running();
                self.hard_drop();
                had_piece
            }
            Command::Start | Command::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
