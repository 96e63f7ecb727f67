//! First-class action types for pentago.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use super::position::Position;
use super::quadrant::Quadrant;
use super::rotation::Spin;
use super::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in pentago: a player places a marble at a position, then
/// turns one quadrant a quarter turn.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the marble is placed.
    pub position: Position,
    /// The quadrant the player turns after placing.
    pub quadrant: Quadrant,
    /// The direction the quadrant is turned.
    pub spin: Spin,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position, quadrant: Quadrant, spin: Spin) -> Self {
        Self {
            player,
            position,
            quadrant,
            spin,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the placement position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the quadrant this move turns.
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the turn direction of this move.
    pub fn spin(&self) -> Spin {
        self.spin
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} -> {}, {} {:?}",
            self.player, self.position, self.quadrant, self.spin
        )
    }
}

/// Error that can occur when validating a move.
///
/// Every rejection leaves the game untouched; the caller can correct
/// the move and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("game is already finished")]
    GameOver,

    /// It's not this player's turn.
    #[display("it is not {_0:?}'s turn")]
    WrongPlayer(Player),

    /// The target cell is already occupied.
    #[display("position {_0} is not empty")]
    InvalidPosition(Position),
}

impl std::error::Error for MoveError {}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues with the opponent to move.
    Continue,
    /// This move ended the game.
    Finished(GameStatus),
}
