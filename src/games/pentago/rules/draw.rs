//! Draw detection logic for pentago.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all 36 cells occupied).
///
/// A full board with no qualifying line indicates a draw. Marbles are
/// never removed, so this is equivalent to 36 placements having been
/// made.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board
        .cells()
        .iter()
        .flatten()
        .all(|cell| *cell != Cell::Empty)
}
