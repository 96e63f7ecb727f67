//! Quarter-turn rotation of a 3x3 quadrant.

use serde::{Deserialize, Serialize};

/// Direction a quadrant is turned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Spin {
    /// Quarter turn clockwise.
    #[strum(serialize = "cw", serialize = "clockwise", serialize = "c")]
    Clockwise,
    /// Quarter turn counter-clockwise.
    #[strum(serialize = "ccw", serialize = "counterclockwise", serialize = "a")]
    CounterClockwise,
}

/// Rotates a 3x3 grid a quarter turn, returning a new grid.
///
/// Row indices grow downward, which mirrors the rotation sense
/// relative to standard mathematical convention: clockwise sends
/// `(row, col)` to `(col, 2 - row)` and counter-clockwise sends it
/// to `(2 - col, row)`. The mapping is a bijection; values only move,
/// they are never changed.
pub fn rotate<T: Copy>(cells: [[T; 3]; 3], spin: Spin) -> [[T; 3]; 3] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            // Source cell that lands at (row, col).
            let (src_row, src_col) = match spin {
                Spin::Clockwise => (2 - col, row),
                Spin::CounterClockwise => (col, 2 - row),
            };
            cells[src_row][src_col]
        })
    })
}
