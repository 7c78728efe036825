use std::str::FromStr;

use super::error::FenError;
use super::{Color, Piece, Position, Square};

impl Position {
    /// Parse the piece placement field of a FEN string, plus an optional side
    /// to move (`w` or `b`, White when absent).
    ///
    /// FEN lists rank 8 first, which is row 0 here, so ranks map to rows in
    /// order. Castling, en passant and clock fields are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let side = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSide {
                    found: other.to_string(),
                })
            }
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty(side);
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    position.set_piece(sq, Some(piece));
                }
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        Ok(position)
    }

    /// Placement and side to move, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in self.squares.chunks(8) {
            let mut rank = String::new();
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!("{} {}", rows.join("/"), active)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
