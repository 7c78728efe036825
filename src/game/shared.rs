use std::sync::Arc;

use parking_lot::Mutex;

use super::{Game, GameOptions, MoveOutcome};
use crate::board::{Move, MoveError, Position, Square, SquareSet};

/// A game that can be driven from several threads.
///
/// Move legality depends on the position it was generated from, so
/// validation and application happen under a single lock per game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    #[must_use]
    pub fn with_options(options: GameOptions) -> Self {
        Self::new(Game::with_options(options))
    }

    pub fn select(&self, square: Square) -> Result<SquareSet, MoveError> {
        self.inner.lock().select(square)
    }

    pub fn play(&self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.inner.lock().play(mv)
    }

    pub fn undo(&self) -> bool {
        self.inner.lock().undo()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Copy of the current position.
    #[must_use]
    pub fn position(&self) -> Position {
        *self.inner.lock().position()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::board::Color;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_only_one_of_two_racing_moves_applies() {
        let game = SharedGame::default();
        let handles: Vec<_> = ["e2e4", "d2d4"]
            .into_iter()
            .map(|text| {
                let game = game.clone();
                thread::spawn(move || game.play(mv(text)).is_ok())
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // The second move is refused because White already moved.
        assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
        game.with(|g| {
            assert_eq!(g.side_to_move(), Color::Black);
            assert_eq!(g.history_len(), 1);
        });
    }

    #[test]
    fn test_clones_share_state() {
        let game = SharedGame::default();
        let other = game.clone();
        game.play(mv("g1f3")).unwrap();
        assert_eq!(other.position(), game.position());
        assert!(other.undo());
        assert_eq!(game.position(), Position::starting());
    }
}
