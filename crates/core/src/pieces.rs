//! Pieces module - the tetromino catalog
//!
//! Each piece is a square occupancy grid plus a display color. The catalog is
//! immutable; rotation always produces a new [`Shape`] (see
//! [`crate::rotation`]).

use crate::shape::Shape;
use crate::types::{Color, Offset, PieceKind, BOARD_WIDTH};

/// Catalog entry for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

pub const CYAN: Color = Color::new(0, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const PURPLE: Color = Color::new(128, 0, 128);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const RED: Color = Color::new(255, 0, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const ORANGE: Color = Color::new(255, 165, 0);

/// The seven pieces, in [`PieceKind::ALL`] order
pub const CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: CYAN,
    },
    PieceDef {
        kind: PieceKind::O,
        shape: Shape::from_rows([[1, 1], [1, 1]]),
        color: YELLOW,
    },
    PieceDef {
        kind: PieceKind::T,
        shape: Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: PURPLE,
    },
    PieceDef {
        kind: PieceKind::S,
        shape: Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: GREEN,
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: RED,
    },
    PieceDef {
        kind: PieceKind::J,
        shape: Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: BLUE,
    },
    PieceDef {
        kind: PieceKind::L,
        shape: Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: ORANGE,
    },
];

/// Look up the catalog entry for a kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Spawn-orientation shape for a kind (a copy; the catalog is never mutated)
pub fn get_shape(kind: PieceKind) -> Shape {
    piece_def(kind).shape
}

/// Offset that centers `shape` horizontally on row 0
pub fn spawn_offset(shape: &Shape) -> Offset {
    let x = (BOARD_WIDTH as usize).saturating_sub(shape.size()) / 2;
    Offset::new(x as i8, 0)
}
