//! One game session: a game, its clock and the optional automated opponent.
//!
//! The session is the single owner of everything a game needs. Running two
//! games means creating two sessions; nothing is shared between them.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use parking_lot::Mutex;

use crate::board::{Color, GameError, Move, PieceKind, Square};
use crate::clock::{format_clock, Clock, ClockTimer, SharedClock, StopFlag};
use crate::config::{GameMode, SessionConfig};
use crate::game::{format_history, GameState, GameStatus, MoveTextError};
use crate::opponent::RandomOpponent;

/// Game status plus the one outcome only a session can know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Game(GameStatus),
    /// `Color` ran out of time and lost, whatever the board says.
    TimeoutLoss(Color),
}

impl SessionStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        match self {
            SessionStatus::Game(status) => status.is_terminal(),
            SessionStatus::TimeoutLoss(_) => true,
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Game(status) => write!(f, "{status}"),
            SessionStatus::TimeoutLoss(color) => {
                write!(f, "{} wins on time", color.opponent())
            }
        }
    }
}

/// A game in progress with its clock.
///
/// When the config asks for a real-time clock, a [`ClockTimer`] ticks the
/// side to move once per `tick_unit`. The timer is cancelled as soon as the
/// game ends and replaced on [`Session::new_game`], so a finished game's
/// clock never keeps running.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    game: GameState,
    clock: SharedClock,
    timer: Option<ClockTimer>,
    timeout: StopFlag,
    opponent: RandomOpponent,
}

impl Session {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let opponent = match config.rng_seed {
            Some(seed) => RandomOpponent::seeded(seed),
            None => RandomOpponent::from_entropy(),
        };
        let clock = Arc::new(Mutex::new(Clock::new(
            config.initial_time,
            config.tick_unit,
        )));

        let mut session = Session {
            config,
            game: GameState::new(),
            clock,
            timer: None,
            timeout: StopFlag::new(),
            opponent,
        };
        session.start_timer();
        info!("new session, mode {:?}", session.config.mode);
        session
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// A copy of the clock as it stands now.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock.lock().clone()
    }

    /// Timeout first, then the board.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.timed_out() {
            Some(color) => SessionStatus::TimeoutLoss(color),
            None => SessionStatus::Game(self.game.status()),
        }
    }

    /// Abandon the current game and start over with full time.
    pub fn new_game(&mut self) {
        self.stop_timer();
        self.game = GameState::new();
        self.clock.lock().reset();
        self.timeout.clear();
        self.start_timer();
        info!("new game");
    }

    /// Start over in `mode`, e.g. switching from two players to the bot.
    pub fn new_game_with_mode(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.new_game();
    }

    /// Legal moves from `square`; empty once the session is over.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> Vec<Move> {
        if self.timed_out().is_some() {
            return Vec::new();
        }
        self.game.legal_moves(square)
    }

    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<SessionStatus, GameError> {
        self.ensure_time_left()?;
        self.game.play(from, to, promotion)?;
        Ok(self.after_move())
    }

    /// Play a move given as long-algebraic text.
    pub fn play_text(&mut self, text: &str) -> Result<SessionStatus, MoveTextError> {
        self.ensure_time_left()?;
        let mv = self.game.parse_move(text)?;
        self.game.apply_move(mv)?;
        Ok(self.after_move())
    }

    /// Let the random opponent move if it is its turn.
    ///
    /// Returns the move played, or `None` when it is a human's turn.
    pub fn bot_move(&mut self) -> Result<Option<Move>, GameError> {
        if !self.config.mode.is_bot(self.game.side_to_move()) {
            return Ok(None);
        }
        self.ensure_time_left()?;
        if self.game.status().is_terminal() {
            return Err(GameError::GameOver);
        }

        let Some(mv) = self.opponent.choose_move(&self.game) else {
            return Err(GameError::GameOver);
        };
        self.game.apply_move(mv)?;
        self.after_move();
        Ok(Some(mv))
    }

    /// Take back one ply. Refused after a timeout.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        self.ensure_time_left()?;
        let was_over = self.game.status().is_terminal();
        let mv = self.game.undo_last()?;
        self.clock.lock().switch_to(self.game.side_to_move());
        if was_over && !self.game.status().is_terminal() {
            self.start_timer();
        }
        Ok(mv)
    }

    /// The first piece of the side to move, scanning from a8 across and
    /// down to h1, that has a legal move, with those moves.
    #[must_use]
    pub fn hint(&self) -> Option<(Square, Vec<Move>)> {
        if self.timed_out().is_some() {
            return None;
        }
        let side = self.game.side_to_move();
        Square::all()
            .filter(|&sq| self.game.board().is_occupied_by_color(sq, side))
            .map(|sq| (sq, self.game.legal_moves(sq)))
            .find(|(_, moves)| !moves.is_empty())
    }

    /// Numbered history, one line per ply: `"1. e2 → e4"`.
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        format_history(self.game.moves())
    }

    #[must_use]
    pub fn remaining(&self, color: Color) -> Duration {
        self.clock.lock().remaining(color)
    }

    /// `color`'s remaining time as `MM:SS`.
    #[must_use]
    pub fn clock_display(&self, color: Color) -> String {
        format_clock(self.remaining(color))
    }

    /// True when `color` is on the move and at or below the low-time threshold.
    #[must_use]
    pub fn is_low_time(&self, color: Color) -> bool {
        self.clock
            .lock()
            .is_low_time(color, self.config.low_time_threshold)
    }

    /// Advance the clock by one unit by hand. Does nothing once the game
    /// is over.
    pub fn tick_clock(&mut self) -> SessionStatus {
        if !self.status().is_over() {
            let mut clock = self.clock.lock();
            clock.tick();
            if let Some(side) = clock.flagged() {
                info!("{side} ran out of time");
                self.timeout.raise();
            }
        }
        self.status()
    }

    /// True while a background timer is ticking this session's clock.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.timer.as_ref().is_some_and(ClockTimer::is_running)
    }

    fn timed_out(&self) -> Option<Color> {
        if !self.timeout.is_raised() {
            return None;
        }
        self.clock.lock().flagged()
    }

    fn ensure_time_left(&self) -> Result<(), GameError> {
        match self.timed_out() {
            Some(_) => Err(GameError::GameOver),
            None => Ok(()),
        }
    }

    fn after_move(&mut self) -> SessionStatus {
        self.clock.lock().switch_to(self.game.side_to_move());
        if self.game.status().is_terminal() {
            self.stop_timer();
        }
        self.status()
    }

    fn start_timer(&mut self) {
        if !self.config.real_time_clock || self.timer.is_some() {
            return;
        }
        self.timer = ClockTimer::start(
            Arc::clone(&self.clock),
            self.config.tick_unit,
            self.timeout.clone(),
        );
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}
