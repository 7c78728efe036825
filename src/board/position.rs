use super::{Color, Move, Piece, PieceKind, Square};

/// Back rank order from file a to file h
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 board plus the side to move.
///
/// Engine queries take `&Position` and never modify it. Playing a move
/// produces a fresh value through [`Position::with_move`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty(side_to_move: Color) -> Self {
        Position {
            squares: [None; 64],
            side_to_move,
        }
    }

    /// The standard starting layout: Black on rows 0-1, White on rows 6-7,
    /// White to move.
    #[must_use]
    pub fn starting() -> Self {
        let mut position = Position::empty(Color::White);
        for col in 0..8u8 {
            let kind = BACK_RANK[col as usize];
            for color in Color::BOTH {
                let back = color.back_row();
                let pawns = color.pawn_start_row();
                if let Some(sq) = Square::new(back, col) {
                    position.set_piece(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::new(pawns, col) {
                    position.set_piece(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        position
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// All pieces of one color with their squares, in index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, piece)| piece.color == color)
    }

    /// Every occupied square with its piece, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// First square holding the king of `color`, if any.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Apply `mv` to a copy of this position.
    ///
    /// The origin is cleared, the destination takes the moving piece and the
    /// side to move flips. The displaced occupant of the destination, if any,
    /// is returned alongside. An empty origin yields a copy with only the
    /// side flipped.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> (Position, Option<Piece>) {
        let mut next = *self;
        let captured = match next.squares[mv.from.index()].take() {
            Some(moving) => next.squares[mv.to.index()].replace(moving),
            None => None,
        };
        next.side_to_move = self.side_to_move.opponent();
        (next, captured)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Position;
    use crate::board::{Color, Piece};

    #[derive(Serialize)]
    struct PositionRef<'a> {
        squares: &'a [Option<Piece>],
        side_to_move: Color,
    }

    #[derive(Deserialize)]
    struct PositionOwned {
        squares: Vec<Option<Piece>>,
        side_to_move: Color,
    }

    impl Serialize for Position {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            PositionRef {
                squares: &self.squares,
                side_to_move: self.side_to_move,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Position {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let owned = PositionOwned::deserialize(deserializer)?;
            let len = owned.squares.len();
            let squares: [Option<Piece>; 64] = owned
                .squares
                .try_into()
                .map_err(|_| D::Error::invalid_length(len, &"64 squares"))?;
            Ok(Position {
                squares,
                side_to_move: owned.side_to_move,
            })
        }
    }
}
