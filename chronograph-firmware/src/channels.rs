//! Shared state and inter-task signals

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU32;

use chronograph_core::{ElapsedTime, OverflowPolicy, SharedStopwatch};

/// The stopwatch, touched by the tick task and the input task
///
/// The overflow policy is replaced from config at boot.
pub static STOPWATCH: SharedStopwatch = SharedStopwatch::new(OverflowPolicy::Saturate);

/// Latest elapsed time waiting to be drawn
///
/// Single slot: a newer value overwrites one the display task has not
/// picked up yet.
pub static RENDER_SLOT: Signal<CriticalSectionRawMutex, ElapsedTime> = Signal::new();

/// Total ticks dropped by the tick task
pub static DROPPED_TICKS: AtomicU32 = AtomicU32::new(0);
