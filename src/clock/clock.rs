use std::fmt;
use std::time::Duration;

use log::trace;

use crate::board::Color;

/// Per-side countdown.
///
/// Time only moves when [`Clock::tick`] is called; the clock knows nothing
/// about the board beyond which side is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    initial: Duration,
    tick_unit: Duration,
    white_remaining: Duration,
    black_remaining: Duration,
    running: Color,
}

impl Clock {
    /// Both sides start with `initial`; each tick costs the running side
    /// `tick_unit`. White runs first.
    #[must_use]
    pub fn new(initial: Duration, tick_unit: Duration) -> Self {
        Clock {
            initial,
            tick_unit,
            white_remaining: initial,
            black_remaining: initial,
            running: Color::White,
        }
    }

    #[must_use]
    pub fn remaining(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white_remaining,
            Color::Black => self.black_remaining,
        }
    }

    #[must_use]
    pub fn running_side(&self) -> Color {
        self.running
    }

    #[must_use]
    pub fn tick_unit(&self) -> Duration {
        self.tick_unit
    }

    /// Charge one unit to the running side, stopping at zero.
    pub fn tick(&mut self) {
        let unit = self.tick_unit;
        let remaining = match self.running {
            Color::White => &mut self.white_remaining,
            Color::Black => &mut self.black_remaining,
        };
        *remaining = remaining.saturating_sub(unit);
        trace!("tick: {} has {}", self.running, format_clock(*remaining));
    }

    /// True once `color` has no time left.
    #[must_use]
    pub fn elapsed(&self, color: Color) -> bool {
        self.remaining(color).is_zero()
    }

    /// The side that has run out of time, if any.
    #[must_use]
    pub fn flagged(&self) -> Option<Color> {
        Color::BOTH.into_iter().find(|&color| self.elapsed(color))
    }

    /// Hand the running clock to `color`.
    pub fn switch_to(&mut self, color: Color) {
        self.running = color;
    }

    /// Restore full time for both sides with White running.
    pub fn reset(&mut self) {
        self.white_remaining = self.initial;
        self.black_remaining = self.initial;
        self.running = Color::White;
    }

    /// Low-time warning: `color` is on the move with at most `threshold` left.
    #[must_use]
    pub fn is_low_time(&self, color: Color, threshold: Duration) -> bool {
        self.running == color && self.remaining(color) <= threshold
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "White {}  Black {}",
            format_clock(self.white_remaining),
            format_clock(self.black_remaining)
        )
    }
}

/// `MM:SS`, rounding partial seconds up so `00:00` only shows once a side
/// has actually run out.
#[must_use]
pub fn format_clock(remaining: Duration) -> String {
    let mut secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        secs += 1;
    }
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_minutes() -> Clock {
        Clock::new(Duration::from_secs(600), Duration::from_secs(1))
    }

    #[test]
    fn test_tick_charges_running_side() {
        let mut clock = ten_minutes();
        clock.tick();
        assert_eq!(clock.remaining(Color::White), Duration::from_secs(599));
        assert_eq!(clock.remaining(Color::Black), Duration::from_secs(600));

        clock.switch_to(Color::Black);
        clock.tick();
        clock.tick();
        assert_eq!(clock.remaining(Color::Black), Duration::from_secs(598));
    }

    #[test]
    fn test_six_hundred_ticks_flag() {
        let mut clock = ten_minutes();
        for _ in 0..599 {
            clock.tick();
        }
        assert!(!clock.elapsed(Color::White));
        assert_eq!(clock.flagged(), None);

        clock.tick();
        assert_eq!(clock.remaining(Color::White), Duration::ZERO);
        assert!(clock.elapsed(Color::White));
        assert_eq!(clock.flagged(), Some(Color::White));

        clock.tick();
        assert_eq!(clock.remaining(Color::White), Duration::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut clock = ten_minutes();
        clock.switch_to(Color::Black);
        clock.tick();
        clock.reset();
        assert_eq!(clock, ten_minutes());
    }

    #[test]
    fn test_low_time_only_for_running_side() {
        let mut clock = Clock::new(Duration::from_secs(30), Duration::from_secs(1));
        let threshold = Duration::from_secs(30);
        assert!(clock.is_low_time(Color::White, threshold));
        assert!(!clock.is_low_time(Color::Black, threshold));

        clock.switch_to(Color::Black);
        assert!(clock.is_low_time(Color::Black, threshold));
        assert!(!clock.is_low_time(Color::White, threshold));

        let roomy = ten_minutes();
        assert!(!roomy.is_low_time(Color::White, threshold));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
        assert_eq!(format_clock(Duration::from_secs(59)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "01:01");
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(400)), "00:01");
    }

    #[test]
    fn test_display() {
        assert_eq!(ten_minutes().to_string(), "White 10:00  Black 10:00");
    }
}
