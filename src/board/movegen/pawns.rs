use super::super::{Color, Position, Square, SquareSet};

/// Whether pawn generation reports real moves or only threatened squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PawnMode {
    /// Diagonals only when an enemy piece stands there, plus forward pushes.
    #[default]
    Normal,
    /// Both forward diagonals regardless of occupancy, no pushes. Used to
    /// ask whether a pawn threatens a square.
    AttackOnly,
}

impl Position {
    /// Pawn destinations for a pawn of `color` on `from`.
    ///
    /// White advances toward row 0, Black toward row 7. A pawn on its starting
    /// row may advance two squares when both squares ahead are empty. There is
    /// no promotion: a pawn on the last row has no forward move.
    #[must_use]
    pub fn pawn_moves(&self, from: Square, color: Color, mode: PawnMode) -> SquareSet {
        let dir = color.pawn_direction();
        let mut moves = SquareSet::EMPTY;

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                let enemy_there = self
                    .piece_at(target)
                    .is_some_and(|piece| !piece.is_friend_of(color));
                if mode == PawnMode::AttackOnly || enemy_there {
                    moves.insert(target);
                }
            }
        }

        if mode == PawnMode::AttackOnly {
            return moves;
        }

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.insert(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.insert(two);
                        }
                    }
                }
            }
        }

        moves
    }
}
