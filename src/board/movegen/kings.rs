use super::super::leapers::KING_TARGETS;
use super::super::{Color, Position, Square, SquareSet};

impl Position {
    /// King destinations: adjacent squares within one row and one column of
    /// `from`, minus squares holding a piece of `color`. No castling.
    #[must_use]
    pub fn king_moves(&self, from: Square, color: Color) -> SquareSet {
        self.leaper_moves(KING_TARGETS[from.index()], color)
    }
}
