use crate::board::{Color, GameStatus, Piece, Position};

/// Pieces removed from the board, bucketed by their color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub(crate) fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    #[must_use]
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }
}

/// Game state saved before a move is applied; popping one undoes the move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub ply: u32,
    pub captured: CapturedPieces,
    pub status: GameStatus,
}
