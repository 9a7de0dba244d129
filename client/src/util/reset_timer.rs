//! `gloo-timers` implementation of the acknowledgment reset scheduler.
//!
//! A [`ResetTimer`] owns a browser `setTimeout`. Cancelling drops it (which
//! clears the timeout); detaching forgets it so it fires even after the
//! contact form is gone. The callback raises a shared flag so held timers can
//! be released once they have run. Outside the browser nothing is scheduled
//! and no timer is ever pending.

#[cfg(test)]
#[path = "reset_timer_test.rs"]
mod reset_timer_test;

#[cfg(feature = "hydrate")]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
use std::time::Duration;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
use site::capture::{ResetScheduler, ScheduledTask};

#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

pub struct ResetTimer {
    #[cfg(feature = "hydrate")]
    timeout: Timeout,
    #[cfg(feature = "hydrate")]
    fired: Rc<Cell<bool>>,
}

impl ScheduledTask for ResetTimer {
    fn cancel(self) {
        #[cfg(feature = "hydrate")]
        drop(self.timeout);
    }

    fn detach(self) {
        #[cfg(feature = "hydrate")]
        self.timeout.forget();
    }

    fn is_pending(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            !self.fired.get()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl ResetScheduler for TimeoutScheduler {
    type Task = ResetTimer;

    fn schedule<F>(&self, delay: Duration, reset: F) -> ResetTimer
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let fired = Rc::new(Cell::new(false));
            let flag = Rc::clone(&fired);
            let timeout = Timeout::new(delay_millis(delay), move || {
                flag.set(true);
                reset();
            });
            ResetTimer { timeout, fired }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, reset);
            ResetTimer {}
        }
    }
}

/// Clamp a delay to the `u32` milliseconds `setTimeout` accepts.
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
