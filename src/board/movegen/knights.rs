use super::super::leapers::KNIGHT_TARGETS;
use super::super::{Color, Position, Square, SquareSet};

impl Position {
    /// Knight destinations from `from`: the eight (±2, ±1)/(±1, ±2) jumps that
    /// stay on the board, minus squares holding a piece of `color`.
    #[must_use]
    pub fn knight_moves(&self, from: Square, color: Color) -> SquareSet {
        self.leaper_moves(KNIGHT_TARGETS[from.index()], color)
    }
}
