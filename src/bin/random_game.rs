use std::env;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use chess_rules::game::{Game, GameOptions};

const DEFAULT_MAX_PLIES: u32 = 200;

fn main() {
    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let max_plies = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_options(GameOptions::strict());
    println!("seed: {seed}");

    while game.ply() <= max_plies {
        let moves = game.available_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        match game.play(mv) {
            Ok(outcome) => {
                let capture = outcome
                    .captured
                    .map(|p| format!(" x{}", p.to_fen_char()))
                    .unwrap_or_default();
                println!("{:>3}. {mv}{capture} ({})", game.ply() - 1, outcome.status);
            }
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }

    println!("{}", game.position());
    println!("final status: {}", game.status());
}
