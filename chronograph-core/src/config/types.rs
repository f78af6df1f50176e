//! Configuration type definitions

use heapless::String;

use crate::input::Debouncer;
use crate::time::OverflowPolicy;

/// Maximum splash text length (one LCD row)
pub const MAX_SPLASH_LEN: usize = 16;

/// Default splash text shown at boot
pub const DEFAULT_SPLASH: &str = "Stopwatch Ready";

/// Largest accepted debounce window
pub const MAX_DEBOUNCE_MS: u16 = 200;

/// Largest accepted button poll interval
pub const MAX_POLL_INTERVAL_MS: u16 = 50;

/// Largest accepted splash duration
pub const MAX_SPLASH_MS: u16 = 10_000;

/// Largest accepted render throttle interval
pub const MAX_RENDER_INTERVAL_MS: u16 = 1000;

/// Button sampling configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Time a level must be stable before it is accepted (0 = no filtering)
    pub debounce_ms: u16,
    /// Main-loop poll interval
    pub poll_interval_ms: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            poll_interval_ms: 1,
        }
    }
}

impl InputConfig {
    /// Stable samples needed by each button debouncer
    pub fn debounce_samples(&self) -> u16 {
        Debouncer::samples_for(self.debounce_ms, self.poll_interval_ms)
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Text shown on row 0 at boot
    pub splash: String<MAX_SPLASH_LEN>,
    /// How long the splash stays up
    pub splash_ms: u16,
    /// Minimum time between redraws (0 = redraw on every change)
    pub render_interval_ms: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let mut splash = String::new();
        let _ = splash.push_str(DEFAULT_SPLASH);
        Self {
            splash,
            splash_ms: 2000,
            render_interval_ms: 0,
        }
    }
}

/// Complete stopwatch configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchConfig {
    /// Behaviour at the maximum representable time
    pub overflow: OverflowPolicy,
    pub input: InputConfig,
    pub display: DisplayConfig,
}
