mod action;
mod game;
mod position;
mod quadrant;
mod rotation;
mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use game::Game;
pub use position::{ParseError, Position};
pub use quadrant::Quadrant;
pub use rotation::{rotate, Spin};
pub use rules::{is_full, winner, LineWinner};
pub use types::{Board, Cell, GameStatus, Player};
