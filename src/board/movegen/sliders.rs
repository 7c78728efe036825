use super::super::{Color, Position, Square, SquareSet};

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Position {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> SquareSet {
        match slider {
            SliderType::Bishop => self.ray_moves(from, color, &BISHOP_DIRECTIONS),
            SliderType::Rook => self.ray_moves(from, color, &ROOK_DIRECTIONS),
            SliderType::Queen => {
                self.ray_moves(from, color, &BISHOP_DIRECTIONS)
                    | self.ray_moves(from, color, &ROOK_DIRECTIONS)
            }
        }
    }

    /// Cast a ray along each direction one square at a time. A ray ends at the
    /// board edge, before a friendly piece, or on an enemy piece (included as a
    /// capture).
    fn ray_moves(&self, from: Square, color: Color, directions: &[(i8, i8)]) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.piece_at(next) {
                    None => moves.insert(next),
                    Some(piece) => {
                        if !piece.is_friend_of(color) {
                            moves.insert(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }

    #[must_use]
    pub fn bishop_moves(&self, from: Square, color: Color) -> SquareSet {
        self.generate_slider_moves(from, color, SliderType::Bishop)
    }

    #[must_use]
    pub fn rook_moves(&self, from: Square, color: Color) -> SquareSet {
        self.generate_slider_moves(from, color, SliderType::Rook)
    }

    /// Union of the bishop and rook rays from the same square.
    #[must_use]
    pub fn queen_moves(&self, from: Square, color: Color) -> SquareSet {
        self.generate_slider_moves(from, color, SliderType::Queen)
    }
}
