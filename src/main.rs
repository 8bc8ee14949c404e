use std::env;
use std::io::{self, BufRead, Write};

use chess_session::board::Color;
use chess_session::command::{parse_args, parse_command, Command};
use chess_session::{Session, SessionStatus};

const HELP: &str = "\
commands:
  e2e4 | move e2e4    play a move (append q/r/b/n to choose a promotion)
  moves <square>      list legal moves from a square
  undo                take back the last move
  hint                show a piece that can move
  history             list moves played
  board | status | clock
  new [pvp|bot [white|black]]
                      start a new game, optionally switching mode
  perft <depth>       count move paths from the current position
  quit";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CHESS_LOG", "warn")).init();

    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: chess_session [--bot [white|black]] [--seconds N] [--seed N] [--no-clock]");
            std::process::exit(2);
        }
    };

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", session.game().board());
    play_bot(&mut session);
    print_prompt(&session, &mut stdout);

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => {
                print_prompt(&session, &mut stdout);
                continue;
            }
            Err(e) => {
                println!("error: {e}");
                print_prompt(&session, &mut stdout);
                continue;
            }
        };

        match cmd {
            Command::Move(text) => match session.play_text(&text) {
                Ok(status) => {
                    println!("{}", session.game().board());
                    report(status);
                    play_bot(&mut session);
                }
                Err(e) => println!("error: {e}"),
            },
            Command::Moves(square) => {
                let moves = session.legal_moves(square);
                if moves.is_empty() {
                    println!("no legal moves from {square}");
                } else {
                    let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
                    println!("{}", list.join(" "));
                }
            }
            Command::Undo => match session.undo() {
                Ok(mv) => {
                    println!("took back {mv}");
                    println!("{}", session.game().board());
                }
                Err(e) => println!("error: {e}"),
            },
            Command::Hint => match session.hint() {
                Some((square, moves)) => {
                    let targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
                    println!("try {square}: {}", targets.join(" "));
                }
                None => println!("no moves available"),
            },
            Command::History => {
                for line in session.history_lines() {
                    println!("{line}");
                }
            }
            Command::Board => println!("{}", session.game().board()),
            Command::Status => println!("{}", session.status()),
            Command::Clock => print_clock(&session),
            Command::NewGame(mode) => {
                match mode {
                    Some(mode) => session.new_game_with_mode(mode),
                    None => session.new_game(),
                }
                println!("{}", session.game().board());
                play_bot(&mut session);
            }
            Command::Perft(depth) => {
                let mut game = session.game().clone();
                println!("perft {depth}: {}", game.perft(depth));
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }

        print_prompt(&session, &mut stdout);
    }
}

/// Let the bot reply while it is on the move.
fn play_bot(session: &mut Session) {
    while let Ok(Some(mv)) = session.bot_move() {
        println!("bot plays {mv}");
        println!("{}", session.game().board());
        report(session.status());
    }
}

fn report(status: SessionStatus) {
    if !matches!(
        status,
        SessionStatus::Game(chess_session::GameStatus::InProgress)
    ) {
        println!("{status}");
    }
}

fn print_clock(session: &Session) {
    let mark = |color: Color| if session.is_low_time(color) { "!" } else { "" };
    println!(
        "White {}{}  Black {}{}",
        session.clock_display(Color::White),
        mark(Color::White),
        session.clock_display(Color::Black),
        mark(Color::Black),
    );
}

fn print_prompt(session: &Session, stdout: &mut io::Stdout) {
    let status = session.status();
    if status.is_over() {
        print!("[{status}] > ");
    } else {
        print!("{} to move > ", session.game().side_to_move());
    }
    let _ = stdout.flush();
}
