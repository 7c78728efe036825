//! Pseudo-legal move generation.
//!
//! Every generator maps (origin, position, moving color) to the set of
//! destinations allowed by the piece's movement pattern. Squares held by
//! `color` are excluded and squares held by the other side are included as
//! captures. Whether the move exposes the mover's own king is not checked
//! here; see the `check` module for that filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use pawns::PawnMode;

use super::{Color, PieceKind, Position, Square, SquareSet};

impl Position {
    /// Dispatch to the generator for `kind`. Pawns use [`PawnMode::Normal`].
    ///
    /// An empty `from` contributes nothing. The occupant's kind and color
    /// are taken on trust from the caller.
    #[must_use]
    pub fn generate_moves(&self, kind: PieceKind, from: Square, color: Color) -> SquareSet {
        if self.is_empty(from) {
            return SquareSet::EMPTY;
        }
        match kind {
            PieceKind::Pawn => self.pawn_moves(from, color, PawnMode::Normal),
            PieceKind::Knight => self.knight_moves(from, color),
            PieceKind::Bishop => self.bishop_moves(from, color),
            PieceKind::Rook => self.rook_moves(from, color),
            PieceKind::Queen => self.queen_moves(from, color),
            PieceKind::King => self.king_moves(from, color),
        }
    }

    /// Squares a piece of `kind` and `color` on `from` threatens. Identical to
    /// [`Position::generate_moves`] except pawns report both diagonals.
    #[must_use]
    pub fn attacks_from(&self, kind: PieceKind, from: Square, color: Color) -> SquareSet {
        match kind {
            PieceKind::Pawn => self.pawn_moves(from, color, PawnMode::AttackOnly),
            _ => self.generate_moves(kind, from, color),
        }
    }

    /// Pseudo-legal destinations of whatever stands on `from`, using its own
    /// color. Empty when the square is empty.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> SquareSet {
        match self.piece_at(from) {
            Some(piece) => self.generate_moves(piece.kind, from, piece.color),
            None => SquareSet::EMPTY,
        }
    }

    fn leaper_moves(&self, targets: SquareSet, color: Color) -> SquareSet {
        targets
            .iter()
            .filter(|&to| !self.piece_at(to).is_some_and(|piece| piece.is_friend_of(color)))
            .collect()
    }
}
