//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - what occupies a square
//! - `Square` - row-major board index (0 = a8, 63 = h1)
//! - `SquareSet` - 64-bit set of squares, the output of move generation
//! - `Move` - origin/destination pair

mod moves;
mod piece;
mod square;
mod square_set;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
