//! Win detection logic for pentago.
//!
//! A player wins by holding five consecutive marbles along a row, a
//! column, or a diagonal in either orientation. Both players can hold
//! qualifying lines at once (a rotation can complete lines for both),
//! so axis scans report a four-valued signal rather than a single
//! winner.

use super::super::types::{Board, Cell, Player};
use tracing::instrument;

/// Winner signal reported by a scan axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineWinner {
    /// No qualifying line on this axis.
    None,
    /// White holds a qualifying line.
    White,
    /// Black holds a qualifying line.
    Black,
    /// Both players hold qualifying lines.
    Both,
}

impl LineWinner {
    /// Marks `player` as holding a qualifying line.
    fn mark(self, player: Player) -> Self {
        let won = match player {
            Player::White => LineWinner::White,
            Player::Black => LineWinner::Black,
        };
        self.combine(won)
    }

    /// Combines two winner signals.
    ///
    /// The combine is a logical OR over colors: if the two signals
    /// disagree on a single winner, both players have qualifying lines
    /// and the result is `Both`.
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (LineWinner::None, winner) => winner,
            (winner, LineWinner::None) => winner,
            (left, right) if left == right => left,
            _ => LineWinner::Both,
        }
    }
}

/// Run-length scan along one line of cells.
///
/// Any non-matching cell (empty or the opposing color) breaks a run,
/// so both counters reset together whenever the scanned color changes.
#[derive(Debug, Clone, Copy)]
struct RunScan {
    white_len: u8,
    black_len: u8,
    winner: LineWinner,
}

impl RunScan {
    fn new() -> Self {
        Self {
            white_len: 0,
            black_len: 0,
            winner: LineWinner::None,
        }
    }

    /// Feeds the next cell of the line into the scan.
    ///
    /// Scanning never stops early: a line longer than five can reach
    /// five for a color and keep going, which is how a single axis can
    /// report both colors.
    fn push(&mut self, cell: Cell) {
        match cell {
            Cell::Occupied(Player::White) => {
                self.white_len += 1;
                self.black_len = 0;
                if self.white_len >= 5 {
                    self.winner = self.winner.mark(Player::White);
                }
            }
            Cell::Occupied(Player::Black) => {
                self.black_len += 1;
                self.white_len = 0;
                if self.black_len >= 5 {
                    self.winner = self.winner.mark(Player::Black);
                }
            }
            Cell::Empty => {
                self.white_len = 0;
                self.black_len = 0;
            }
        }
    }

    fn winner(self) -> LineWinner {
        self.winner
    }
}

/// Checks for qualifying lines along the 6 rows.
pub fn horizontal_winner(board: &Board) -> LineWinner {
    let mut axis = LineWinner::None;
    for row in board.cells() {
        let mut scan = RunScan::new();
        for cell in row {
            scan.push(*cell);
        }
        axis = axis.combine(scan.winner());
    }
    axis
}

/// Checks for qualifying lines along the 6 columns.
pub fn vertical_winner(board: &Board) -> LineWinner {
    let cells = board.cells();
    let mut axis = LineWinner::None;
    for col in 0..6 {
        let mut scan = RunScan::new();
        for row in 0..6 {
            scan.push(cells[row][col]);
        }
        axis = axis.combine(scan.winner());
    }
    axis
}

/// Checks for qualifying lines along diagonals of both orientations.
///
/// Every diagonal of length five or more is covered by scanning a
/// five-cell window from each in-bounds starting offset; the length-6
/// diagonals are covered by two overlapping windows.
pub fn diagonal_winner(board: &Board) -> LineWinner {
    let cells = board.cells();
    let mut axis = LineWinner::None;

    // Sloping down to the right.
    for row_start in 0..2 {
        for col_start in 0..2 {
            let mut scan = RunScan::new();
            for step in 0..5 {
                scan.push(cells[row_start + step][col_start + step]);
            }
            axis = axis.combine(scan.winner());
        }
    }

    // Sloping up to the right.
    for row_start in 4..6 {
        for col_start in 0..2 {
            let mut scan = RunScan::new();
            for step in 0..5 {
                scan.push(cells[row_start - step][col_start + step]);
            }
            axis = axis.combine(scan.winner());
        }
    }

    axis
}

/// Checks for qualifying lines across all axes.
///
/// Axis signals are OR-combined rather than short-circuited on the
/// first hit, so one player winning horizontally and the other
/// vertically reports `Both`.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> LineWinner {
    horizontal_winner(board)
        .combine(vertical_winner(board))
        .combine(diagonal_winner(board))
}
