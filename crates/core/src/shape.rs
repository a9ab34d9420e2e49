//! Occupancy grids for pieces.
//!
//! A [`Shape`] is a square grid of side 1..=4 whose cells are either occupied
//! or empty. Grids are stored inline in a fixed 4x4 array; cells beyond `size`
//! are always empty so that derived equality compares only the live grid.

use serde::{Serialize, Serializer};

use crate::types::MAX_SHAPE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from `N` rows of `N` cells (non-zero = occupied).
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0 or larger than [`MAX_SHAPE_SIZE`]. Catalog shapes are
    /// built in const context, so a bad grid fails compilation there.
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE, "shape side must be 1..=4");

        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                grid[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            size: N as u8,
            grid,
        }
    }

    /// An all-empty grid of the given side, clamped to 1..=4.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size: size.clamp(1, MAX_SHAPE_SIZE) as u8,
            grid: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, occupied: bool) {
        if row < self.size() && col < self.size() {
            self.grid[row][col] = occupied;
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at (row, col) is occupied; false outside the grid
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.grid[row][col]
    }

    /// Occupied cells as (row, col), row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| self.grid[r][c])
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// One row as 0/1 values
    pub fn row_bits(&self, row: usize) -> Vec<u8> {
        (0..self.size())
            .map(|c| u8::from(self.is_occupied(row, c)))
            .collect()
    }

    /// The whole grid as rows of 0/1 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size()).map(|r| self.row_bits(r)).collect()
    }
}

/// Shapes serialize as their 0/1 rows, e.g. `[[0,1,0],[1,1,1],[0,0,0]]`.
impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq((0..self.size()).map(|r| self.row_bits(r)))
    }
}
