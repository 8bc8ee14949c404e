use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the position after the last applied or undone move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Side to move is in check but has a legal reply
    Check,
    /// Side to move is in check with no legal reply
    Checkmate,
    /// Side to move is not in check and has no legal move
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMove,
    DrawByInsufficientMaterial,
}

impl GameStatus {
    /// Terminal statuses are absorbing: no further move can be applied.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress | GameStatus::Check)
    }

    #[inline]
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawByRepetition
                | GameStatus::DrawByFiftyMove
                | GameStatus::DrawByInsufficientMaterial
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawByRepetition => "draw by threefold repetition",
            GameStatus::DrawByFiftyMove => "draw by fifty-move rule",
            GameStatus::DrawByInsufficientMaterial => "draw by insufficient material",
        };
        f.write_str(text)
    }
}
