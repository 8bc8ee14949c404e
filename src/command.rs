//! Line-oriented commands for the text driver.

use std::fmt;
use std::time::Duration;

use crate::board::{Color, Square, SquareError};
use crate::config::{GameMode, SessionConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A move in long algebraic notation
    Move(String),
    /// List legal moves from a square
    Moves(Square),
    Undo,
    Hint,
    History,
    Board,
    Status,
    Clock,
    /// Start over, switching mode when one is given
    NewGame(Option<GameMode>),
    Perft(usize),
    Help,
    Quit,
}

/// Reasons a driver input line or startup argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument { command: &'static str },
    InvalidSquare(SquareError),
    InvalidNumber { flag: String, value: String },
    InvalidColor(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(line) => write!(f, "Unknown command '{line}'"),
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' needs an argument")
            }
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidNumber { flag, value } => {
                write!(f, "{flag} expects a number, got '{value}'")
            }
            CommandError::InvalidColor(value) => {
                write!(f, "Expected 'white' or 'black', got '{value}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`; a bare move such as
/// `e2e4` is accepted without the `move` keyword.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let cmd = match head {
        "move" | "m" => {
            let text = parts
                .get(1)
                .ok_or(CommandError::MissingArgument { command: "move" })?;
            Command::Move((*text).to_string())
        }
        "moves" => {
            let square = parts
                .get(1)
                .ok_or(CommandError::MissingArgument { command: "moves" })?;
            Command::Moves(square.parse()?)
        }
        "undo" => Command::Undo,
        "hint" => Command::Hint,
        "history" => Command::History,
        "board" | "d" => Command::Board,
        "status" => Command::Status,
        "clock" => Command::Clock,
        "new" | "newgame" => Command::NewGame(parse_mode(&parts[1..])?),
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            Command::Perft(depth)
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        text if looks_like_move(text) => Command::Move(text.to_string()),
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };
    Ok(Some(cmd))
}

/// `pvp`, `bot` (bot plays Black) or `bot white|black`; nothing keeps the
/// current mode.
fn parse_mode(args: &[&str]) -> Result<Option<GameMode>, CommandError> {
    let mode = match args {
        [] => return Ok(None),
        ["pvp"] => GameMode::PlayerVsPlayer,
        ["bot"] | ["bot", "black"] => GameMode::VersusBot { bot: Color::Black },
        ["bot", "white"] => GameMode::VersusBot { bot: Color::White },
        ["bot", other] => return Err(CommandError::InvalidColor((*other).to_string())),
        _ => return Err(CommandError::Unknown(args.join(" "))),
    };
    Ok(Some(mode))
}

fn looks_like_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    (4..=5).contains(&bytes.len())
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_lowercase()
        && bytes[3].is_ascii_digit()
}

/// Build a session config from command-line flags:
/// `--bot [white|black]`, `--seconds N`, `--seed N`, `--no-clock`.
pub fn parse_args<I>(args: I) -> Result<SessionConfig, CommandError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = SessionConfig::default();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bot" => {
                let bot = match args.peek().map(String::as_str) {
                    Some("white") => {
                        args.next();
                        Color::White
                    }
                    Some("black") => {
                        args.next();
                        Color::Black
                    }
                    Some(other) if !other.starts_with("--") => {
                        return Err(CommandError::InvalidColor(other.to_string()));
                    }
                    _ => Color::Black,
                };
                config.mode = GameMode::VersusBot { bot };
            }
            "--seconds" => {
                let secs = number_arg("--seconds", args.next())?;
                config.initial_time = Duration::from_secs(secs);
            }
            "--seed" => config.rng_seed = Some(number_arg("--seed", args.next())?),
            "--no-clock" => config.real_time_clock = false,
            _ => return Err(CommandError::Unknown(arg)),
        }
    }
    Ok(config)
}

fn number_arg(flag: &'static str, value: Option<String>) -> Result<u64, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument { command: flag })?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}
