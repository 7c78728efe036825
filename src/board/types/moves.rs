//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// An (origin, destination) pair.
///
/// Whether a move captures is not recorded here; it follows from the
/// occupant of the destination in the position the move is applied to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

/// Coordinate notation, e.g. `e2e4`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        if !s.is_ascii() {
            return Err(invalid());
        }
        if s.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let from = s[0..2].parse::<Square>().map_err(|_| invalid())?;
        let to = s[2..4].parse::<Square>().map_err(|_| invalid())?;
        Ok(Move { from, to })
    }
}
