//! Embedded configuration
//!
//! Edit stopwatch.toml and rebuild to customize. The build script rejects
//! an invalid file, so the fallback below only triggers if the parser and
//! build-time validation disagree.

use defmt::*;

use chronograph_core::config::{parse_config, StopwatchConfig};

/// Embedded configuration (compiled into firmware)
const EMBEDDED_CONFIG: &str = include_str!("../stopwatch.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> StopwatchConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: overflow={}, debounce={}ms, poll={}ms, render={}ms",
                config.overflow,
                config.input.debounce_ms,
                config.input.poll_interval_ms,
                config.display.render_interval_ms
            );
            config
        }
        Err(e) => {
            warn!("Invalid embedded config ({}), using defaults", e);
            StopwatchConfig::default()
        }
    }
}
