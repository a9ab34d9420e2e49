//! Collision detection between a shape and the board.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::{Offset, BOARD_HEIGHT, BOARD_WIDTH};

/// Test whether `shape` placed at `offset` overlaps a wall, the floor, or a
/// filled board cell.
///
/// Cells above the board (`y < 0`) are free space: they only collide with the
/// side walls. This lets grids with empty leading rows sit partly above row 0.
pub fn collides(shape: &Shape, board: &Board, offset: Offset) -> bool {
    shape.cells().any(|(r, c)| {
        let x = offset.x as i16 + c as i16;
        let y = offset.y as i16 + r as i16;

        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}
