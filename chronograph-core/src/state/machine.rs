//! Stopwatch state machine definition
//!
//! Mode changes come only from button events; elapsed time changes only
//! on ticks (while running) and on reset.

use super::events::ButtonEvent;
use crate::time::{ElapsedTime, OverflowPolicy};

/// Run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunMode {
    /// Counting is frozen
    #[default]
    Stopped,
    /// Counting advances every tick
    Running,
}

impl RunMode {
    pub fn is_running(&self) -> bool {
        matches!(self, RunMode::Running)
    }
}

/// The stopwatch
///
/// Operations that change what the display should show return the new
/// elapsed time so the caller can hand it to the renderer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stopwatch {
    mode: RunMode,
    elapsed: ElapsedTime,
    policy: OverflowPolicy,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self {
            mode: RunMode::Stopped,
            elapsed: ElapsedTime::ZERO,
            policy,
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn set_overflow_policy(&mut self, policy: OverflowPolicy) {
        self.policy = policy;
    }

    /// Advance by one tick
    ///
    /// Returns the new elapsed time if it changed, `None` while stopped
    /// (or saturated).
    pub fn on_tick(&mut self) -> Option<ElapsedTime> {
        if !self.mode.is_running() {
            return None;
        }
        self.elapsed.advance(self.policy).then_some(self.elapsed)
    }

    /// Start counting (idempotent)
    pub fn on_start(&mut self) {
        self.mode = RunMode::Running;
    }

    /// Freeze counting (idempotent)
    pub fn on_stop(&mut self) {
        self.mode = RunMode::Stopped;
    }

    /// Stop and clear the elapsed time
    ///
    /// Always returns the cleared time: the display must reflect it even
    /// if the counter was already zero.
    pub fn on_reset(&mut self) -> ElapsedTime {
        self.mode = RunMode::Stopped;
        self.elapsed = ElapsedTime::ZERO;
        self.elapsed
    }

    /// Apply a button event
    ///
    /// Returns the time to redraw, if the event requires one.
    pub fn handle(&mut self, event: ButtonEvent) -> Option<ElapsedTime> {
        match event {
            ButtonEvent::StartPressed => {
                self.on_start();
                None
            }
            ButtonEvent::StopPressed => {
                self.on_stop();
                None
            }
            ButtonEvent::ResetPressed => Some(self.on_reset()),
        }
    }
}
