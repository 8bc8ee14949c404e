use std::env;

use chess_session::game::GameState;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut game = GameState::new();
    for text in args.iter().skip(1) {
        let played = game
            .parse_move(text)
            .and_then(|mv| game.apply_move(mv).map_err(Into::into));
        if let Err(e) = played {
            eprintln!("{text}: {e}");
            std::process::exit(1);
        }
    }

    let legal_moves = game.all_legal_moves();
    let status = game.status();
    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {status}");
    println!("checkmate: {}", status == chess_session::GameStatus::Checkmate);
    println!("stalemate: {}", status == chess_session::GameStatus::Stalemate);
    for mv in &legal_moves {
        println!("{mv}");
    }
}
