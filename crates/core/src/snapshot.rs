//! Read-only views of the game for presentation layers.

use serde::Serialize;

use crate::board::BoardRows;
use crate::game_state::ActivePiece;
use crate::shape::Shape;
use crate::types::{Color, PieceKind, SessionState, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute (x, y) board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.cells_at(self.y)
    }

    /// Same cells as [`ActiveSnapshot::cells`] with the top row moved to `y`
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = (i16, i16)> + '_ {
        let (x0, y0) = (self.x as i16, y as i16);
        self.shape
            .cells()
            .map(move |(r, c)| (x0 + c as i16, y0 + r as i16))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.offset.x,
            y: value.offset.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: BoardRows,
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would come to rest on
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub session: SessionState,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.score = 0;
        self.lines = 0;
        self.session = SessionState::NotStarted;
    }

    pub fn playable(&self) -> bool {
        self.session == SessionState::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            session: SessionState::NotStarted,
        }
    }
}
