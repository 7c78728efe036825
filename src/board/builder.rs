//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let g1: Square = "g1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(g1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(position.find_king(Color::White), Some(g1));
//! ```

use super::{Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board, White to move.
    #[must_use]
    pub const fn new() -> Self {
        PositionBuilder {
            position: Position::empty(Color::White),
        }
    }

    /// Create a builder starting from the standard initial layout.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            position: Position::starting(),
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.position
            .set_piece(square, Some(Piece::new(kind, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.set_piece(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn build(self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built.to_fen(), Position::starting().to_fen());
    }

    #[test]
    fn test_empty_board() {
        let pos = PositionBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build();

        assert!(pos.piece_at(sq("e1")).is_some());
        assert!(pos.piece_at(sq("e8")).is_some());
        assert!(pos.piece_at(sq("a1")).is_none());
    }

    #[test]
    fn test_piece_replaces_occupant() {
        let pos = PositionBuilder::starting_position()
            .piece(sq("d1"), Color::Black, PieceKind::Knight)
            .build();
        assert_eq!(
            pos.piece_at(sq("d1")),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
    }

    #[test]
    fn test_side_to_move() {
        let pos = PositionBuilder::new().side_to_move(Color::Black).build();
        assert_eq!(pos.side_to_move(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(sq("a1"))
            .build();

        assert!(pos.piece_at(sq("a1")).is_none());
        assert!(pos.piece_at(sq("b1")).is_some());
    }
}
