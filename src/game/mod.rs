//! Turn and history management on top of the rules engine.
//!
//! [`Game`] owns the authoritative position, the half-move counter, the
//! captured-piece lists and an undo stack. It calls into the pure engine
//! at fixed points: to list a selected piece's moves, to validate a move,
//! and to classify the position after a move.

mod history;
mod options;
mod shared;

pub use history::{CapturedPieces, Snapshot};
pub use options::GameOptions;
pub use shared::SharedGame;

use crate::board::{Color, GameStatus, Move, MoveError, Piece, Position, Square, SquareSet};
use crate::debug_log;

/// Result of a successfully played move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub captured: Option<Piece>,
    /// Status of the side now to move
    pub status: GameStatus,
}

/// A two-player game with an undo stack.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    ply: u32,
    captured: CapturedPieces,
    status: GameStatus,
    history: Vec<Snapshot>,
    options: GameOptions,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the starting position with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    #[must_use]
    pub fn with_options(options: GameOptions) -> Self {
        Self::from_position(Position::starting(), options)
    }

    /// Start from an arbitrary position. The status is computed immediately
    /// for the position's side to move.
    #[must_use]
    pub fn from_position(position: Position, options: GameOptions) -> Self {
        Game {
            position,
            ply: 1,
            captured: CapturedPieces::default(),
            status: position.status(),
            history: Vec::new(),
            options,
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Half-move counter, 1 before the first move.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.options.freeze_on_checkmate && self.status.is_checkmate()
    }

    /// Destinations for the piece on `square`.
    ///
    /// Rejects an empty square, a piece of the side not to move, and any
    /// selection once a frozen game has ended.
    pub fn select(&self, square: Square) -> Result<SquareSet, MoveError> {
        if let GameStatus::Checkmate(loser) = self.status {
            if self.options.freeze_on_checkmate {
                return Err(MoveError::GameOver { loser });
            }
        }
        let piece = self
            .position
            .piece_at(square)
            .ok_or(MoveError::EmptySquare { square })?;
        let to_move = self.side_to_move();
        if piece.color != to_move {
            return Err(MoveError::WrongSide { square, to_move });
        }
        Ok(if self.options.enforce_king_safety {
            self.position.legal_moves(square)
        } else {
            self.position.generate_moves(piece.kind, square, piece.color)
        })
    }

    /// Play `mv` for the side to move.
    ///
    /// The current state is pushed onto the undo stack, a captured piece is
    /// recorded under its color, the board and side to move are updated and
    /// the new side to move is classified.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let destinations = self.select(mv.from)?;
        if !destinations.contains(mv.to) {
            return Err(MoveError::IllegalDestination { mv });
        }

        self.history.push(Snapshot {
            position: self.position,
            ply: self.ply,
            captured: self.captured.clone(),
            status: self.status,
        });

        let (next, captured) = self.position.with_move(mv);
        if let Some(piece) = captured {
            debug_log!("{mv}: captured {piece}");
            self.captured.record(piece);
        }
        self.position = next;
        self.ply += 1;
        self.status = self.position.status();

        debug_log!("ply {}: played {mv}, status {}", self.ply - 1, self.status);

        Ok(MoveOutcome {
            captured,
            status: self.status,
        })
    }

    /// Revert the last move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.position = snapshot.position;
        self.ply = snapshot.ply;
        self.captured = snapshot.captured;
        self.status = snapshot.status;
        debug_log!("undo to ply {}", self.ply);
        true
    }

    /// Back to the starting position with empty captures and history.
    /// Options are kept.
    pub fn reset(&mut self) {
        *self = Game::with_options(self.options);
        debug_log!("game reset");
    }

    /// Every move available to the side to move under the current options.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in self.position.pieces(self.side_to_move()) {
            if let Ok(destinations) = self.select(from) {
                moves.extend(destinations.iter().map(|to| Move::new(from, to)));
            }
        }
        moves
    }
}
