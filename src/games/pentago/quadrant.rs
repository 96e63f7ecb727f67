//! The four 3x3 quadrants partitioning the board.

use serde::{Deserialize, Serialize};

/// One of the four fixed 3x3 regions of the board.
///
/// The quadrants partition the 6x6 grid exhaustively:
/// `Q1` top-left, `Q2` top-right, `Q3` bottom-left, `Q4` bottom-right.
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
pub enum Quadrant {
    /// Top-left: rows 0-2, columns 0-2.
    #[strum(serialize = "q1", serialize = "1")]
    Q1,
    /// Top-right: rows 0-2, columns 3-5.
    #[strum(serialize = "q2", serialize = "2")]
    Q2,
    /// Bottom-left: rows 3-5, columns 0-2.
    #[strum(serialize = "q3", serialize = "3")]
    Q3,
    /// Bottom-right: rows 3-5, columns 3-5.
    #[strum(serialize = "q4", serialize = "4")]
    Q4,
}

impl Quadrant {
    /// Top-left corner of this quadrant on the main board, as a
    /// `(row, col)` offset.
    pub fn offset(self) -> (usize, usize) {
        match self {
            Quadrant::Q1 => (0, 0),
            Quadrant::Q2 => (0, 3),
            Quadrant::Q3 => (3, 0),
            Quadrant::Q4 => (3, 3),
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("q1".parse(), Ok(Quadrant::Q1));
        assert_eq!("Q2".parse(), Ok(Quadrant::Q2));
        assert_eq!("3".parse(), Ok(Quadrant::Q3));
        assert_eq!("q4".parse(), Ok(Quadrant::Q4));
        assert!("q5".parse::<Quadrant>().is_err());
        assert!("".parse::<Quadrant>().is_err());
    }
}
