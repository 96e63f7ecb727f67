//! Core domain types for pentago.

use super::position::Position;
use super::quadrant::Quadrant;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// White marbles (moves second).
    White,
    /// Black marbles (moves first).
    Black,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

/// A cell on the pentago board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's marble.
    Occupied(Player),
}

/// 6x6 pentago board.
///
/// The board is the single source of truth for marble placement.
/// Quadrant views are derived from it on demand and written back
/// after a rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 6]; 6],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 6]; 6],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[[Cell; 6]; 6] {
        &self.cells
    }

    /// Extracts the 3x3 cells of a quadrant.
    pub fn quadrant(&self, quadrant: Quadrant) -> [[Cell; 3]; 3] {
        let (row_start, col_start) = quadrant.offset();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.cells[row_start + row][col_start + col])
        })
    }

    /// Overwrites a quadrant of the board with the given 3x3 cells.
    pub fn set_quadrant(&mut self, quadrant: Quadrant, cells: [[Cell; 3]; 3]) {
        let (row_start, col_start) = quadrant.offset();
        for row in 0..3 {
            for col in 0..3 {
                self.cells[row_start + row][col_start + col] = cells[row][col];
            }
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Rows are labelled `a`-`f` and columns `0`-`5`, matching the
    /// textual coordinate notation.
    pub fn display(&self) -> String {
        let mut result = String::from("  0 1 2 3 4 5\n");
        for (row_index, row) in self.cells.iter().enumerate() {
            result.push((b'a' + row_index as u8) as char);
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '-',
                    Cell::Occupied(Player::White) => 'W',
                    Cell::Occupied(Player::Black) => 'B',
                };
                result.push(' ');
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw, either on a full board or with both
    /// players completing a line on the same move.
    Draw,
}
