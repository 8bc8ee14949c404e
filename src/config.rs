//! Session configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Who makes the moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    /// Both sides are entered by hand.
    #[default]
    PlayerVsPlayer,
    /// The random opponent plays `bot`.
    VersusBot { bot: Color },
}

impl GameMode {
    /// True when `color` is played by the automated opponent.
    #[must_use]
    pub fn is_bot(self, color: Color) -> bool {
        matches!(self, GameMode::VersusBot { bot } if bot == color)
    }
}

/// Settings for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Starting time for each side
    pub initial_time: Duration,
    /// Time charged per clock tick, and the tick period in real time
    pub tick_unit: Duration,
    /// Remaining time at or below which the running side is warned
    pub low_time_threshold: Duration,
    pub mode: GameMode,
    /// Seed for the random opponent; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,
    /// Run the clock on a background timer. When off, the clock only moves
    /// through [`crate::session::Session::tick_clock`].
    pub real_time_clock: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            initial_time: Duration::from_secs(600),
            tick_unit: Duration::from_secs(1),
            low_time_threshold: Duration::from_secs(30),
            mode: GameMode::PlayerVsPlayer,
            rng_seed: None,
            real_time_clock: true,
        }
    }
}

impl SessionConfig {
    /// A config with no background timer and a fixed seed, for
    /// deterministic play.
    #[must_use]
    pub fn manual(seed: u64) -> Self {
        SessionConfig {
            rng_seed: Some(seed),
            real_time_clock: false,
            ..SessionConfig::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_initial_time(mut self, initial_time: Duration) -> Self {
        self.initial_time = initial_time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_time, Duration::from_secs(600));
        assert_eq!(config.tick_unit, Duration::from_secs(1));
        assert_eq!(config.low_time_threshold, Duration::from_secs(30));
        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert!(config.real_time_clock);
    }

    #[test]
    fn test_is_bot() {
        let mode = GameMode::VersusBot { bot: Color::Black };
        assert!(mode.is_bot(Color::Black));
        assert!(!mode.is_bot(Color::White));
        assert!(!GameMode::PlayerVsPlayer.is_bot(Color::Black));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = SessionConfig::manual(7).with_mode(GameMode::VersusBot { bot: Color::White });
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
