//! Millisecond clock with a one-shot deferred callback
//!
//! The clock is advanced by a periodic hardware tick. The interrupt handler
//! owns nothing but a shared reference:
//!
//! ```ignore
//! static CLOCK: Clock = Clock::new(ClockConfig::new());
//!
//! #[interrupt]
//! fn TIMER0() {
//!     CLOCK.on_tick(&mut |clock: &Clock, now_ms| blink(clock, now_ms));
//! }
//! ```
//!
//! Main-line code reads the time with [`Clock::now`] and schedules the
//! deferred ("slow interrupt") callback with [`Clock::arm_deferred`]. The
//! callback runs from the tick handler after the critical section has been
//! released, so the next tick can interrupt it. It is never re-entered: a
//! tick that finds the callback still running leaves the deadline armed for a
//! later tick.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::ClockConfig;

/// Remaining time at or below which the deferred callback counts as imminent
pub const IMMINENT_MS: u32 = 5;

/// Source of monotonic milliseconds
///
/// Every blocking loop in the engine polls one of these.
pub trait TimeSource {
    /// Current time in milliseconds; wraps after ~49.7 days
    fn now_ms(&self) -> u32;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// `true` once `now` is at or past `deadline`, across the 32-bit wrap
pub fn deadline_reached(now: u32, deadline: u32) -> bool {
    now.wrapping_sub(deadline) < 0x8000_0000
}

/// State of the deferred callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeferredStatus {
    /// Nothing is armed
    Off,
    /// Due within [`IMMINENT_MS`] or already overdue; may fire at any moment
    Imminent,
    /// Milliseconds left until the deadline
    Remaining(u32),
}

/// Callback run by the tick handler when the deferred deadline passes
pub trait DeferredHandler {
    fn on_deferred(&mut self, clock: &Clock, now_ms: u32);
}

impl<F: FnMut(&Clock, u32)> DeferredHandler for F {
    fn on_deferred(&mut self, clock: &Clock, now_ms: u32) {
        self(clock, now_ms)
    }
}

#[derive(Debug, Clone, Copy)]
struct ClockState {
    now_ms: u32,
    armed: bool,
    deadline_ms: u32,
    in_deferred: bool,
}

enum TickOutcome {
    Idle,
    Fire(u32),
    Busy,
}

/// Monotonic millisecond clock shared between the tick interrupt and the UI
pub struct Clock {
    tick_ms: u32,
    state: Mutex<Cell<ClockState>>,
}

impl Clock {
    pub const fn new(config: ClockConfig) -> Self {
        Self {
            tick_ms: config.tick_ms,
            state: Mutex::new(Cell::new(ClockState {
                now_ms: 0,
                armed: false,
                deadline_ms: 0,
                in_deferred: false,
            })),
        }
    }

    pub const fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Current time, read as one snapshot
    pub fn now(&self) -> u32 {
        self.snapshot().now_ms
    }

    /// Schedule the deferred callback for an absolute time
    ///
    /// Replaces any deadline that has not fired yet.
    pub fn arm_deferred(&self, deadline_ms: u32) {
        self.update(|s| {
            s.deadline_ms = deadline_ms;
            s.armed = true;
        });
    }

    /// Schedule the deferred callback `delay_ms` from now
    pub fn arm_deferred_in(&self, delay_ms: u32) {
        self.update(|s| {
            s.deadline_ms = s.now_ms.wrapping_add(delay_ms);
            s.armed = true;
        });
    }

    /// Disarm the deferred callback
    ///
    /// A callback that is already running completes; callers must tolerate
    /// that one extra firing.
    pub fn cancel_deferred(&self) {
        self.update(|s| s.armed = false);
    }

    pub fn is_deferred_armed(&self) -> bool {
        self.snapshot().armed
    }

    pub fn time_until_deferred(&self) -> DeferredStatus {
        let s = self.snapshot();
        if !s.armed {
            return DeferredStatus::Off;
        }
        if deadline_reached(s.now_ms, s.deadline_ms) {
            return DeferredStatus::Imminent;
        }
        match s.deadline_ms.wrapping_sub(s.now_ms) {
            d if d <= IMMINENT_MS => DeferredStatus::Imminent,
            d => DeferredStatus::Remaining(d),
        }
    }

    /// Advance the clock by one tick period
    ///
    /// Call from the timer interrupt. Runs `handler` when the deferred
    /// deadline has passed, outside the critical section. Returns `true` if
    /// the handler ran.
    pub fn on_tick<H: DeferredHandler + ?Sized>(&self, handler: &mut H) -> bool {
        let outcome = self.update(|s| {
            s.now_ms = s.now_ms.wrapping_add(self.tick_ms);
            if !s.armed || !deadline_reached(s.now_ms, s.deadline_ms) {
                TickOutcome::Idle
            } else if s.in_deferred {
                TickOutcome::Busy
            } else {
                s.armed = false;
                s.in_deferred = true;
                TickOutcome::Fire(s.now_ms)
            }
        });

        match outcome {
            TickOutcome::Idle => false,
            TickOutcome::Busy => {
                trace!("deferred callback still running, firing skipped");
                false
            }
            TickOutcome::Fire(now_ms) => {
                trace!("deferred callback at {=u32} ms", now_ms);
                handler.on_deferred(self, now_ms);
                self.update(|s| s.in_deferred = false);
                true
            }
        }
    }

    fn snapshot(&self) -> ClockState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClockState) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let result = f(&mut state);
            cell.set(state);
            result
        })
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockConfig::new())
    }
}

impl TimeSource for Clock {
    fn now_ms(&self) -> u32 {
        self.now()
    }
}
