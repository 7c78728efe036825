use std::env;
use std::process::ExitCode;

use chess_rules::board::Move;
use chess_rules::game::Game;

fn main() -> ExitCode {
    let mut game = Game::new();
    let mut moves: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--strict" {
            game.options_mut().enforce_king_safety = true;
        } else {
            moves.push(arg);
        }
    }

    for text in &moves {
        let mv = match text.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = game.play(mv) {
            eprintln!("ply {}: {e}", game.ply());
            return ExitCode::FAILURE;
        }
    }

    let available = game.available_moves();
    println!("{}", game.position());
    println!("fen: {}", game.position().to_fen());
    println!("ply: {}", game.ply());
    println!("status: {}", game.status());
    println!(
        "captured: white {} black {}",
        game.captured().white.len(),
        game.captured().black.len()
    );
    println!("moves: {}", available.len());
    for mv in &available {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
