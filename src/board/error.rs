//! Error types for parsing and game management.
//!
//! The rules engine itself never fails: generators return empty sets and
//! detectors return `false`. Errors only arise from text parsing and from
//! the game manager rejecting a request.

use std::fmt;

use super::{Color, Move, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0-63
    IndexOutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement field is missing entirely
    Empty,
    /// Placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank must describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSide { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSide { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Reasons the game manager refuses a selection or a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the selected origin square
    EmptySquare { square: Square },
    /// The piece on the origin belongs to the side not to move
    WrongSide { square: Square, to_move: Color },
    /// The destination is not among the piece's moves
    IllegalDestination { mv: Move },
    /// The game ended in checkmate and is frozen
    GameOver { loser: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongSide { square, to_move } => {
                write!(f, "Piece on {square} cannot move: {to_move} to move")
            }
            MoveError::IllegalDestination { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::GameOver { loser } => {
                write!(f, "Game over: {loser} is checkmated")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for string-keyed option updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_messages() {
        let err = SquareError::IndexOutOfRange { index: 70 };
        assert!(err.to_string().contains("70"));
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_fen_error_messages() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
        let err = FenError::InvalidSide {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_move_error_messages() {
        let e2 = Square::new(6, 4).unwrap();
        let err = MoveError::EmptySquare { square: e2 };
        assert!(err.to_string().contains("e2"));

        let err = MoveError::WrongSide {
            square: e2,
            to_move: Color::Black,
        };
        assert!(err.to_string().contains("Black to move"));

        let err = MoveError::GameOver {
            loser: Color::White,
        };
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_option_error_messages() {
        let err = OptionError::InvalidValue {
            name: "FreezeOnCheckmate".to_string(),
            value: "maybe".to_string(),
        };
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveParseError::InvalidLength { len: 2 };
        assert_eq!(err.clone(), err);
    }
}
