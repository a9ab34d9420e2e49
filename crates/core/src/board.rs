//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! locked block. Storage is a flat array for cache locality and zero
//! allocation. Coordinates: (x, y) where x ranges 0..9 (left to right) and y
//! ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, Color, Offset, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Upper bound on rows removed by one [`Board::clear_full_rows`] call
pub const MAX_CLEARED_ROWS: usize = HEIGHT;

/// Row-major grid of cells, used to build boards in bulk
pub type BoardRows = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows (top row first)
    pub fn from_rows(rows: BoardRows) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Copy the board out as rows (top row first)
    pub fn to_rows(&self) -> BoardRows {
        let mut rows = [[None; WIDTH]; HEIGHT];
        self.write_rows(&mut rows);
        rows
    }

    /// Write the board into an existing row grid without allocating
    pub fn write_rows(&self, out: &mut BoardRows) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Borrow one row, or None if `y` is out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        Some(&self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Number of filled cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted bottom to top, as they were before compaction).
    ///
    /// Two-pointer compaction from the bottom: every source row is examined
    /// exactly once, so a row that lands on a cleared index is never skipped.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * WIDTH;
                self.cells
                    .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
            }
        }

        // Everything above the last written row is fresh empty space.
        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows
    }

    /// Write `color` into every occupied cell of `shape` placed at `offset`.
    ///
    /// Cells that fall outside the board are skipped. Returns how many cells
    /// were written.
    pub fn lock_shape(&mut self, shape: &Shape, offset: Offset, color: Color) -> usize {
        let mut written = 0;
        for (r, c) in shape.cells() {
            let x = offset.x as i16 + c as i16;
            let y = offset.y as i16 + r as i16;
            if self.set(x, y, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
