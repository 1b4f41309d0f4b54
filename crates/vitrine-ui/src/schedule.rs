//! Scheduled-task handles.
//!
//! All timer-driven behavior goes through explicit handles with cancel
//! semantics: dropping a handle clears the underlying browser timer, so
//! rescheduling cannot leave an earlier task pending.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

/// Run `f` once after `ms` milliseconds, fire-and-forget.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// The carousel's autoplay timer.
///
/// Owns at most one pending interval. [`Autoplay::restart`] replaces any
/// scheduled interval, so a full period always elapses between the last
/// interaction and the next automatic advance.
pub struct Autoplay {
    period_ms: u32,
    tick: Rc<dyn Fn()>,
    handle: Option<Interval>,
}

impl Autoplay {
    /// Create a stopped autoplay timer with the given tick action.
    pub fn new(period_ms: u32, tick: impl Fn() + 'static) -> Self {
        Self {
            period_ms,
            tick: Rc::new(tick),
            handle: None,
        }
    }

    /// Cancel any pending interval and schedule a fresh one.
    pub fn restart(&mut self) {
        let tick = Rc::clone(&self.tick);
        self.handle = Some(Interval::new(self.period_ms, move || tick()));
    }

    /// Cancel the pending interval, if any.
    pub fn stop(&mut self) {
        self.handle = None;
    }

    /// Whether an interval is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
