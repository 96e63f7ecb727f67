//! Board positions and textual coordinate parsing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the 6x6 board.
///
/// Positions are constructed through checked constructors only, so a
/// held `Position` is always in bounds and board indexing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

/// Error that can occur when parsing textual coordinates.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// The coordinate is not a letter `a`-`f` followed by a digit `0`-`5`.
    #[display("invalid coordinate {_0:?}: expected a row letter a-f followed by a column digit 0-5")]
    InvalidCoordinate(String),
}

impl std::error::Error for ParseError {}

impl Position {
    /// Creates a position from zero-based row and column indices.
    ///
    /// Returns `None` if either index is outside the 6x6 board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 6 && col < 6 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a coordinate like `"b3"`: row letter `a`-`f`
    /// (case-insensitive) followed by column digit `0`-`5`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidCoordinate` for any other input.
    #[instrument]
    pub fn parse(coord: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidCoordinate(coord.to_string());
        let mut chars = coord.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let digit = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        let row = match letter.to_ascii_lowercase() {
            letter @ 'a'..='f' => letter as u8 - b'a',
            _ => return Err(invalid()),
        };
        let col = match digit {
            digit @ '0'..='5' => digit as u8 - b'0',
            _ => return Err(invalid()),
        };
        Ok(Self { row, col })
    }

    /// Zero-based row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// All 36 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..6).flat_map(|row| {
            (0..6).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl std::str::FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.row) as char, self.col)
    }
}
