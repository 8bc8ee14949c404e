//! Chess rules engine and game session runtime.
//!
//! [`game::GameState`] holds the authoritative position and enforces the
//! rules; [`session::Session`] wraps one game with its clock and optional
//! random opponent. Rendering is left to the caller: the engine exposes
//! state and accepts commands.

pub mod board;
pub mod clock;
pub mod command;
pub mod config;
pub mod game;
pub mod opponent;
pub mod session;
mod zobrist;

#[cfg(test)]
mod test_support;

pub use board::{Board, Color, GameError, Move, Piece, PieceKind, Square};
pub use clock::Clock;
pub use config::{GameMode, SessionConfig};
pub use game::{GameState, GameStatus};
pub use opponent::RandomOpponent;
pub use session::{Session, SessionStatus};
