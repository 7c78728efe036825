//! Board representation and the chess rules engine.
//!
//! A [`Position`] is 64 square slots plus the side to move. All rules
//! queries are pure: they borrow a position and return a fresh value.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, Position, Square};
//!
//! let position = Position::starting();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = position.generate_moves(PieceKind::Pawn, e2, Color::White);
//! assert_eq!(moves.len(), 2);
//! assert!(!position.is_in_check(Color::White));
//! ```

mod builder;
mod check;
mod display;
mod error;
mod fen;
mod leapers;
mod movegen;
mod perft;
mod position;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use check::GameStatus;
pub use error::{FenError, MoveError, MoveParseError, OptionError, SquareError};
pub use movegen::PawnMode;
pub use position::Position;
pub use types::{Color, Move, Piece, PieceKind, Square, SquareSet, SquareSetIter};

/// Pseudo-legal destinations for a piece of `kind` and `color` on `origin`.
#[must_use]
pub fn generate_moves(
    kind: PieceKind,
    origin: Square,
    position: &Position,
    color: Color,
) -> SquareSet {
    position.generate_moves(kind, origin, color)
}

/// Whether the king of `color` is attacked in `position`.
#[must_use]
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position.is_in_check(color)
}

/// Whether `color` has no move that leaves its king out of check.
#[must_use]
pub fn is_checkmate(position: &Position, color: Color) -> bool {
    position.is_checkmate(color)
}
