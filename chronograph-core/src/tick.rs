//! Tick overrun accounting
//!
//! Ticks are never replayed. When the tick handler wakes a full period or
//! more after its deadline, the missed periods are counted as dropped and
//! the caller re-phases its timer from the current instant. The displayed
//! time then lags wall-clock time by the dropped ticks.

/// The fixed tick period
pub const TICK_PERIOD_MS: u32 = 1;

/// Result of checking one tick against its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Handled within the period
    OnTime,
    /// Handled late; `dropped` whole periods were skipped
    Overrun { dropped: u32 },
}

/// Tracks tick deadlines and overruns
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickMonitor {
    period_us: u64,
    next_deadline_us: u64,
    ticks: u64,
    overruns: u32,
    dropped: u32,
}

impl TickMonitor {
    /// Start monitoring with the first deadline one period after `now_us`
    pub fn new(period_ms: u32, now_us: u64) -> Self {
        let period_us = period_ms.max(1) as u64 * 1000;
        Self {
            period_us,
            next_deadline_us: now_us + period_us,
            ticks: 0,
            overruns: 0,
            dropped: 0,
        }
    }

    /// Record a tick handled at `now_us`
    ///
    /// On overrun the next deadline is re-phased to one period after
    /// `now_us`; the caller must reset its timer the same way.
    pub fn record(&mut self, now_us: u64) -> TickOutcome {
        self.ticks += 1;
        let lateness = now_us.saturating_sub(self.next_deadline_us);

        if lateness < self.period_us {
            self.next_deadline_us += self.period_us;
            return TickOutcome::OnTime;
        }

        let dropped = (lateness / self.period_us).min(u32::MAX as u64) as u32;
        self.overruns = self.overruns.saturating_add(1);
        self.dropped = self.dropped.saturating_add(dropped);
        self.next_deadline_us = now_us + self.period_us;
        TickOutcome::Overrun { dropped }
    }

    /// Ticks handled so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of late ticks
    pub fn overruns(&self) -> u32 {
        self.overruns
    }

    /// Total periods skipped
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
