//! Configuration types and parsing
//!
//! Configuration is a small TOML file embedded in the firmware image and
//! parsed at boot.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::{DisplayConfig, InputConfig, StopwatchConfig, MAX_SPLASH_LEN};
