//! Property-based tests using proptest.

use super::follows_pattern;
use crate::board::{Move, Position};
use crate::game::{Game, GameOptions, Snapshot};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Strategy to generate a random game length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random moves, returning the game and every position
/// it passed through (the starting position included).
fn random_game(seed: u64, plies: usize, options: GameOptions) -> (Game, Vec<Position>) {
    let mut game = Game::with_options(options);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = vec![*game.position()];
    for _ in 0..plies {
        let moves = game.available_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        game.play(mv).unwrap();
        seen.push(*game.position());
    }
    (game, seen)
}

proptest! {
    /// Property: every destination is on the board and follows the piece's
    /// pattern, so no ray or jump wraps across a board edge
    #[test]
    fn prop_destinations_follow_piece_patterns(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (_, seen) = random_game(seed, plies, GameOptions::default());
        for pos in &seen {
            for (from, piece) in pos.occupied() {
                for to in pos.generate_moves(piece.kind, from, piece.color).iter() {
                    prop_assert!(to.index() < 64);
                    prop_assert!(follows_pattern(piece.kind, piece.color, from, to),
                        "{:?} {} -> {} breaks its pattern", piece, from, to);
                    prop_assert!(pos.piece_at(to).map_or(true, |p| p.color != piece.color));
                }
            }
        }
    }

    /// Property: generation and detection are pure and repeatable
    #[test]
    fn prop_generation_is_idempotent(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (game, _) = random_game(seed, plies, GameOptions::default());
        let pos = *game.position();
        for (from, piece) in pos.occupied() {
            let first = pos.generate_moves(piece.kind, from, piece.color);
            let second = pos.generate_moves(piece.kind, from, piece.color);
            prop_assert_eq!(first, second);
        }
        let check = pos.is_in_check(pos.side_to_move());
        prop_assert_eq!(check, pos.is_in_check(pos.side_to_move()));
        let _ = pos.is_checkmate(pos.side_to_move());
        prop_assert_eq!(&pos, game.position());
    }

    /// Property: undoing every move walks back through the exact snapshots
    #[test]
    fn prop_undo_restores_every_snapshot(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut snapshots: Vec<Snapshot> = Vec::new();

        for _ in 0..plies {
            let moves = game.available_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            snapshots.push(Snapshot {
                position: *game.position(),
                ply: game.ply(),
                captured: game.captured().clone(),
                status: game.status(),
            });
            game.play(mv).unwrap();
        }

        while let Some(expected) = snapshots.pop() {
            prop_assert!(game.undo());
            prop_assert_eq!(game.position(), &expected.position);
            prop_assert_eq!(game.ply(), expected.ply);
            prop_assert_eq!(game.captured(), &expected.captured);
            prop_assert_eq!(game.status(), expected.status);
        }
        prop_assert!(!game.undo());
        prop_assert_eq!(game.position(), &Position::starting());
    }

    /// Property: king-safe moves are a subset of pseudo-legal moves and never
    /// leave the mover in check
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (game, _) = random_game(seed, plies, GameOptions::strict());
        let pos = *game.position();
        let side = pos.side_to_move();
        let mut any_legal = false;
        for (from, _) in pos.pieces(side) {
            let pseudo = pos.moves_from(from);
            for to in pos.legal_moves(from).iter() {
                any_legal = true;
                prop_assert!(pseudo.contains(to));
                let (next, _) = pos.with_move(Move::new(from, to));
                prop_assert!(!next.is_in_check(side));
            }
        }
        prop_assert_eq!(any_legal, !pos.is_checkmate(side));
    }

    /// Property: strict play never reaches a position where the side that
    /// just moved is in check
    #[test]
    fn prop_strict_play_never_self_checks(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (_, seen) = random_game(seed, plies, GameOptions::strict());
        for pos in seen.iter().skip(1) {
            prop_assert!(!pos.is_in_check(pos.side_to_move().opponent()));
        }
    }
}
