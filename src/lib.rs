//! Pentago rules engine.
//!
//! Pentago is a two-player abstract strategy game on a 6x6 board
//! divided into four 3x3 quadrants. Each turn a player places a marble
//! and then turns one quadrant a quarter turn; five in a row along any
//! row, column, or diagonal wins.
//!
//! # Architecture
//!
//! - **Board**: the canonical 6x6 grid, single source of truth
//! - **Rules**: pure win/draw evaluation over the board
//! - **Game**: the engine applying moves and deriving the outcome
//!
//! # Example
//!
//! ```
//! use pentago::{Game, Move, MoveOutcome, Player, Position, Quadrant, Spin};
//!
//! let mut game = Game::new();
//! let mv = Move::new(
//!     Player::Black,
//!     Position::parse("b3")?,
//!     Quadrant::Q1,
//!     Spin::Clockwise,
//! );
//! assert_eq!(game.make_move(mv)?, MoveOutcome::Continue);
//! assert_eq!(game.to_move(), Player::White);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Crate-level exports - Game types (pentago)
pub use games::pentago::{
    is_full, rotate, winner, Board, Cell, Game, GameStatus, LineWinner, Move, MoveError,
    MoveOutcome, ParseError, Player, Position, Quadrant, Spin,
};
