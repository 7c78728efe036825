//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A board square as a row-major index 0-63.
///
/// Row 0 is the far rank (rank 8, Black's back rank in the starting
/// layout); column 0 is file a. So `a8` is index 0 and `h1` is index 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board
    pub const COUNT: usize = 64;

    /// Create a square from (row, column), both 0-7
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from an index 0-63
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < Self::COUNT {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Step by a (row, column) delta. Returns `None` when the result would
    /// leave the board, so no step can wrap from one edge file to the other.
    #[inline]
    #[must_use]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row() as i8 + drow;
        let col = self.col() as i8 + dcol;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square((row * 8 + col) as u8))
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, 8 - self.row())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::from_index(idx).ok_or(SquareError::IndexOutOfRange { index: idx })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => 7 - (b - b'1'),
            _ => return Err(invalid()),
        };

        Square::new(row, col).ok_or_else(invalid)
    }
}
