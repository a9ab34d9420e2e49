//! 90° rotation of occupancy grids.
//!
//! Clockwise is a transpose followed by reversing each row; counter-clockwise
//! is a transpose followed by reversing the row order. The input is never
//! modified.

use crate::shape::Shape;
use crate::types::Direction;

pub fn rotate(shape: &Shape, direction: Direction) -> Shape {
    let n = shape.size();
    let mut out = Shape::empty(n);

    for r in 0..n {
        for c in 0..n {
            let occupied = match direction {
                Direction::Clockwise => shape.is_occupied(n - 1 - c, r),
                Direction::CounterClockwise => shape.is_occupied(c, n - 1 - r),
            };
            out.set(r, c, occupied);
        }
    }

    out
}
