//! Game state machine: turn tracking, move application and undo, terminal
//! status detection and move history.
//!
//! # Example
//! ```
//! use chess_session::board::Square;
//! use chess_session::game::{GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.all_legal_moves().len(), 20);
//! game.play(Square::E2, Square::E4, None).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! game.undo_last().unwrap();
//! ```

mod builder;
mod history;
mod notation;
mod state;
mod status;

pub use builder::GameBuilder;
pub use history::HistoryEntry;
pub use notation::{format_history, MoveText, MoveTextError};
pub use state::GameState;
pub use status::GameStatus;

#[cfg(test)]
mod tests;
