//! Game clock: per-side countdown and the background task that drives it.
//!
//! [`Clock`] is a plain value mutated once per tick. [`ClockTimer`] is the
//! scheduled task that ticks a shared clock and must be cancelled when the
//! game it belongs to ends or is reset.

#[allow(clippy::module_inception)]
mod clock;
mod sync;
mod timer;

pub use clock::{format_clock, Clock};
pub use sync::StopFlag;
pub use timer::{ClockTimer, SharedClock};
