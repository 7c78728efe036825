//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    generate_moves, is_checkmate, is_in_check, Color, GameStatus, Move, MoveError, PawnMode,
    Piece, PieceKind, Position, PositionBuilder, Square, SquareSet,
};
pub use crate::game::{Game, GameOptions, MoveOutcome, SharedGame};
