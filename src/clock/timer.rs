//! Scheduled clock ticking on a background thread.
//!
//! The timer owns nothing but a handle: the clock itself is shared with the
//! session, and every tick happens under its lock.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::info;
use parking_lot::Mutex;

use super::{Clock, StopFlag};

/// A clock shared between a session and its timer thread.
pub type SharedClock = Arc<Mutex<Clock>>;

/// A repeating task that ticks a shared [`Clock`] once per period.
///
/// The task ends on its own when a side flags, raising the [`StopFlag`].
/// Otherwise it runs until cancelled; dropping the handle cancels it.
#[derive(Debug)]
pub struct ClockTimer {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    flag: StopFlag,
}

impl ClockTimer {
    /// Start ticking `clock` every `period`.
    ///
    /// Returns `None` if the period is zero or a side has already flagged;
    /// in the latter case `flag` is raised immediately.
    #[must_use]
    pub fn start(clock: SharedClock, period: Duration, flag: StopFlag) -> Option<Self> {
        if period.is_zero() {
            return None;
        }
        if clock.lock().flagged().is_some() {
            flag.raise();
            return None;
        }

        let (cancel, cancelled) = mpsc::channel::<()>();
        let thread_flag = flag.clone();
        let handle = thread::spawn(move || loop {
            match cancelled.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    let mut clock = clock.lock();
                    clock.tick();
                    if let Some(side) = clock.flagged() {
                        info!("{side} ran out of time");
                        thread_flag.raise();
                        break;
                    }
                }
                // Cancelled, or the handle was dropped.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        info!("clock started, ticking every {period:?}");
        Some(ClockTimer {
            cancel: Some(cancel),
            handle: Some(handle),
            flag,
        })
    }

    /// Stop ticking. No tick lands after this returns.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// True until the timer is cancelled or a side flags.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Check if a side has flagged.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.flag.is_raised()
    }

    fn shutdown(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            info!("clock stopped");
        }
    }
}

impl Drop for ClockTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
