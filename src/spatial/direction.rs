//! Closed set of directions a word may run in

use std::fmt;
use std::str::FromStr;

use crate::io::error::{WordGridError, invalid_parameter};

/// Direction a word advances in, one letter per step
///
/// Every direction moves rightward or straight down, so words always read
/// left-to-right or top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Down and to the right
    Diagonal,
    /// Up and to the right
    DiagonalReverse,
}

const STRAIGHT: &[Direction] = &[Direction::Horizontal, Direction::Vertical];

const ALL: &[Direction] = &[
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Diagonal,
    Direction::DiagonalReverse,
];

impl Direction {
    /// Per-step offset `(dx, dy)`
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
            Self::Diagonal => (1, 1),
            Self::DiagonalReverse => (1, -1),
        }
    }

    /// Whether both axes change per step
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::Diagonal | Self::DiagonalReverse)
    }

    /// Directions available for placement and crossing
    ///
    /// Order is fixed so that seeded runs stay reproducible.
    pub const fn active(allow_diagonal: bool) -> &'static [Self] {
        if allow_diagonal { ALL } else { STRAIGHT }
    }

    /// Name used in answer keys and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
            Self::DiagonalReverse => "diagonal-reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = WordGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|direction| direction.name() == s)
            .ok_or_else(|| {
                invalid_parameter(
                    "direction",
                    &s,
                    &"expected horizontal, vertical, diagonal or diagonal-reverse",
                )
            })
    }
}
