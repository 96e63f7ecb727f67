//! Game rules for pentago.
//!
//! This module contains pure functions for evaluating game state
//! according to pentago rules. Rules are separated from board storage
//! so the engine can recompute the outcome on demand.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{winner, LineWinner};
