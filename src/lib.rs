//! Two-player chess rules engine.
//!
//! The [`board`] module holds the pure rules: pseudo-legal move generation
//! per piece, check detection and checkmate detection over an immutable
//! [`Position`]. The [`game`] module layers turn order, captures and undo on
//! top of it.

/// Debug-level log line, compiled only with the `logging` feature.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    };
}
pub(crate) use debug_log;

pub mod board;
pub mod game;

pub use board::{Color, GameStatus, Move, Piece, PieceKind, Position, Square, SquareSet};
pub use game::{Game, GameOptions, SharedGame};
