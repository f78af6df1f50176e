//! Tick task
//!
//! Advances the stopwatch every millisecond and publishes the new time for
//! the display task.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use portable_atomic::Ordering;

use chronograph_core::tick::{TickMonitor, TickOutcome, TICK_PERIOD_MS};

use crate::channels::{DROPPED_TICKS, RENDER_SLOT, STOPWATCH};

/// Tick task - runs on the high-priority interrupt executor
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS as u64));
    let mut monitor = TickMonitor::new(TICK_PERIOD_MS, Instant::now().as_micros());

    loop {
        ticker.next().await;

        if let TickOutcome::Overrun { dropped } = monitor.record(Instant::now().as_micros()) {
            // Missed ticks are not replayed
            ticker.reset();
            DROPPED_TICKS.store(monitor.dropped(), Ordering::Relaxed);
            warn!(
                "Tick overrun: {} dropped ({} total over {} overruns)",
                dropped,
                monitor.dropped(),
                monitor.overruns()
            );
        }

        if let Some(elapsed) = STOPWATCH.tick() {
            RENDER_SLOT.signal(elapsed);
        }
    }
}
