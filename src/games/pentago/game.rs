//! Game engine for pentago.

use super::action::{Move, MoveError, MoveOutcome};
use super::rotation::rotate;
use super::rules::{self, LineWinner};
use super::types::{Board, Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Pentago game engine.
///
/// Owns the board and the placement counter; `make_move` is the sole
/// mutating entry point. The outcome is never stored, it is recomputed
/// from the board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turns_taken: u32,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board. Black moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turns_taken: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of placements made so far.
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player whose turn it is.
    ///
    /// Black moves on even placement counts, White on odd.
    pub fn to_move(&self) -> Player {
        if self.turns_taken % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Checks if the board is full (36 placements made).
    pub fn is_full(&self) -> bool {
        self.turns_taken > 35
    }

    /// Computes the current game status from the board.
    ///
    /// A qualifying line for exactly one player is a win for that
    /// player; lines for both players at once, or a full board with no
    /// line, is a draw.
    pub fn status(&self) -> GameStatus {
        match rules::winner(&self.board) {
            LineWinner::White => GameStatus::Won(Player::White),
            LineWinner::Black => GameStatus::Won(Player::Black),
            LineWinner::Both => GameStatus::Draw,
            LineWinner::None if self.is_full() => GameStatus::Draw,
            LineWinner::None => GameStatus::InProgress,
        }
    }

    /// Applies a move: place the marble, then turn the chosen quadrant.
    ///
    /// A placement that completes a line of five wins immediately and
    /// the requested rotation is not performed. Otherwise the quadrant
    /// is rotated and the outcome is recomputed, since a rotation can
    /// complete lines for either player or both at once.
    ///
    /// # Errors
    ///
    /// Rejects without mutating anything, in this order:
    /// - `MoveError::GameOver` if the game has already been decided.
    /// - `MoveError::WrongPlayer` if it is not the mover's turn.
    /// - `MoveError::InvalidPosition` if the target cell is occupied.
    #[instrument(skip(self), fields(mv = %mv, turn = self.turns_taken))]
    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if mv.player() != self.to_move() {
            return Err(MoveError::WrongPlayer(mv.player()));
        }
        if !self.board.is_empty(mv.position()) {
            return Err(MoveError::InvalidPosition(mv.position()));
        }

        self.board.set(mv.position(), Cell::Occupied(mv.player()));
        self.turns_taken += 1;
        self.history.push(mv);

        // A line completed by the placement alone wins before the
        // rotation happens.
        let status = self.status();
        if let GameStatus::Won(_) = status {
            return Ok(MoveOutcome::Finished(status));
        }

        let turned = rotate(self.board.quadrant(mv.quadrant()), mv.spin());
        self.board.set_quadrant(mv.quadrant(), turned);

        match self.status() {
            GameStatus::InProgress => Ok(MoveOutcome::Continue),
            finished => Ok(MoveOutcome::Finished(finished)),
        }
    }

    /// Reconstructs a game by applying a move list in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered, leaving the moves up
    /// to that point applied.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.make_move(*mv)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full board with no run longer than two in any direction.
    fn full_drawn_board() -> Board {
        let mut board = Board::new();
        for row in 0..6 {
            for col in 0..6 {
                // Blocks of two, phase-shifted on odd rows.
                let white = if row % 2 == 0 {
                    col < 2 || col > 3
                } else {
                    col == 2 || col == 3
                };
                let player = if white { Player::White } else { Player::Black };
                let pos = super::super::Position::new(row, col).unwrap();
                board.set(pos, Cell::Occupied(player));
            }
        }
        board
    }

    #[test]
    fn test_full_board_draw() {
        let game = Game {
            board: full_drawn_board(),
            turns_taken: 36,
            history: Vec::new(),
        };
        assert!(game.is_full());
        assert!(rules::is_full(game.board()));
        assert_eq!(rules::winner(game.board()), LineWinner::None);
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_move_rejected_on_drawn_board() {
        let mut game = Game {
            board: full_drawn_board(),
            turns_taken: 36,
            history: Vec::new(),
        };
        let mv = Move::new(
            Player::Black,
            super::super::Position::parse("a0").unwrap(),
            super::super::Quadrant::Q1,
            super::super::Spin::Clockwise,
        );
        assert_eq!(game.make_move(mv), Err(MoveError::GameOver));
    }
}
