//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal generation and edge guards
//! - `check.rs` - Check, checkmate and check-safe move filtering
//! - `game.rs` - Turn order, captures and undo through the game manager
//! - `proptest.rs` - Property-based tests over randomly played games

mod proptest;

use crate::board::{Color, PieceKind, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

/// Whether `from -> to` fits the movement pattern of `kind`.
pub(super) fn follows_pattern(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    let diagonal = dr != 0 && dr.abs() == dc.abs();
    let straight = (dr == 0) != (dc == 0);
    match kind {
        PieceKind::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0),
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => straight,
        PieceKind::Queen => diagonal || straight,
        PieceKind::Pawn => {
            let dir = color.pawn_direction();
            (dr == dir && dc.abs() <= 1) || (dc == 0 && dr == 2 * dir)
        }
    }
}
