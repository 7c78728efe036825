//! Check and checkmate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Position, Square, SquareSet};

/// Outcome classification for the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// The given color is in check but has an escape.
    Check(Color),
    /// The given color is in check with no escape.
    Checkmate(Color),
}

impl GameStatus {
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        matches!(self, GameStatus::Checkmate(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is checkmated"),
        }
    }
}

impl Position {
    /// True if some piece of the opponent of `color` threatens the king of
    /// `color`.
    ///
    /// A board without a king of `color` is never in check. Enemy pawns are
    /// probed in attack-only mode so their diagonals count as threats.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_attacked_by(king, color.opponent()),
            None => false,
        }
    }

    /// True if any piece of `attacker` threatens `target`.
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|(from, piece)| self.attacks_from(piece.kind, from, attacker).contains(target))
    }

    /// True if no pseudo-legal move of `color` produces a position where its
    /// king is out of check.
    ///
    /// Meant to be asked only after [`Position::is_in_check`] returned true.
    /// Asked of a side that is not in check it answers whether every move
    /// walks into check, which is not a stalemate test.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        !self.has_escape(color)
    }

    /// True if some pseudo-legal move of `color` leaves its king safe.
    #[must_use]
    pub fn has_escape(&self, color: Color) -> bool {
        self.pieces(color).any(|(from, piece)| {
            self.generate_moves(piece.kind, from, color)
                .iter()
                .any(|to| self.keeps_king_safe(Move::new(from, to), color))
        })
    }

    /// Destinations of the piece on `from` that do not leave its own king in
    /// check. Empty when `from` is empty.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        self.generate_moves(piece.kind, from, piece.color)
            .iter()
            .filter(|&to| self.keeps_king_safe(Move::new(from, to), piece.color))
            .collect()
    }

    /// Status of `color`: checkmate is only tested once check is confirmed,
    /// so a stalemated side reports [`GameStatus::Ongoing`].
    #[must_use]
    pub fn status_for(&self, color: Color) -> GameStatus {
        if !self.is_in_check(color) {
            GameStatus::Ongoing
        } else if self.is_checkmate(color) {
            GameStatus::Checkmate(color)
        } else {
            GameStatus::Check(color)
        }
    }

    /// [`Position::status_for`] the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status_for(self.side_to_move)
    }

    fn keeps_king_safe(&self, mv: Move, color: Color) -> bool {
        let (hypothetical, _) = self.with_move(mv);
        !hypothetical.is_in_check(color)
    }
}
