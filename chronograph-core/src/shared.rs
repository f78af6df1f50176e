//! Interrupt-safe stopwatch shared between the tick and main-loop contexts
//!
//! The tick context writes the elapsed time; the main loop writes the run
//! mode and, on reset, the elapsed time too. Every access runs inside a
//! critical section, so a tick can never interleave with the compound
//! reset write and no reader sees a torn value.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::state::{ButtonEvent, RunMode, Stopwatch};
use crate::time::{ElapsedTime, OverflowPolicy};

/// A stopwatch behind a critical-section mutex
pub struct SharedStopwatch {
    inner: Mutex<RefCell<Stopwatch>>,
}

impl SharedStopwatch {
    /// Create a stopped stopwatch at zero
    ///
    /// `const` so it can live in a `static`.
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Stopwatch::new(policy))),
        }
    }

    /// Run `f` with exclusive access to the stopwatch
    pub fn with<R>(&self, f: impl FnOnce(&mut Stopwatch) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow_ref_mut(cs)))
    }

    /// Tick handler entry point
    ///
    /// Returns the time to publish to the renderer, if it changed.
    pub fn tick(&self) -> Option<ElapsedTime> {
        self.with(Stopwatch::on_tick)
    }

    /// Main-loop entry point for button events
    ///
    /// Returns the time to publish to the renderer, if the event requires
    /// a redraw.
    pub fn apply(&self, event: ButtonEvent) -> Option<ElapsedTime> {
        self.with(|sw| sw.handle(event))
    }

    /// Consistent copy of mode and elapsed time
    pub fn snapshot(&self) -> (RunMode, ElapsedTime) {
        self.with(|sw| (sw.mode(), sw.elapsed()))
    }

    pub fn set_overflow_policy(&self, policy: OverflowPolicy) {
        self.with(|sw| sw.set_overflow_policy(policy));
    }
}
