//! Minimal TOML parser for the stopwatch configuration
//!
//! Handles only the subset the configuration needs:
//! - `[section]` headers
//! - `key = value` pairs with string and non-negative integer values
//! - Comments (`# ...`), full-line or trailing
//!
//! Unknown sections and keys are rejected rather than ignored so a typo
//! in the file cannot silently fall back to a default.

use heapless::String;

use super::types::{
    StopwatchConfig, MAX_DEBOUNCE_MS, MAX_POLL_INTERVAL_MS, MAX_RENDER_INTERVAL_MS,
    MAX_SPLASH_LEN, MAX_SPLASH_MS,
};
use crate::time::OverflowPolicy;

/// Parse error, with the 1-based line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Malformed or unknown `[section]` header
    InvalidSection { line: u16 },
    /// Key not valid in its section
    UnknownKey { line: u16 },
    /// Line is not `key = value`
    Syntax { line: u16 },
    /// Value has the wrong type or an unknown variant
    InvalidValue { line: u16 },
    /// Integer value outside its accepted range
    OutOfRange { line: u16 },
    /// Splash text longer than one display row
    SplashTooLong { line: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Stopwatch,
    Input,
    Display,
}

/// Parse configuration text
///
/// Keys that are absent keep their defaults.
pub fn parse_config(input: &str) -> Result<StopwatchConfig, ConfigError> {
    let mut config = StopwatchConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line = (index + 1).min(u16::MAX as usize) as u16;
        let text = strip_comment(raw).trim();

        if text.is_empty() {
            continue;
        }

        if let Some(header) = text.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(ConfigError::InvalidSection { line })?;
            section = match name.trim() {
                "stopwatch" => Section::Stopwatch,
                "input" => Section::Input,
                "display" => Section::Display,
                _ => return Err(ConfigError::InvalidSection { line }),
            };
            continue;
        }

        let (key, value) = text.split_once('=').ok_or(ConfigError::Syntax { line })?;
        let key = key.trim();
        let value = value.trim();

        match (section, key) {
            (Section::Stopwatch, "overflow") => {
                config.overflow = match parse_string(value, line)? {
                    "saturate" => OverflowPolicy::Saturate,
                    "wrap" => OverflowPolicy::Wrap,
                    _ => return Err(ConfigError::InvalidValue { line }),
                };
            }
            (Section::Input, "debounce_ms") => {
                config.input.debounce_ms = parse_ranged(value, 0, MAX_DEBOUNCE_MS, line)?;
            }
            (Section::Input, "poll_interval_ms") => {
                config.input.poll_interval_ms =
                    parse_ranged(value, 1, MAX_POLL_INTERVAL_MS, line)?;
            }
            (Section::Display, "splash") => {
                let text = parse_string(value, line)?;
                if !text.is_ascii() {
                    return Err(ConfigError::InvalidValue { line });
                }
                let mut splash: String<MAX_SPLASH_LEN> = String::new();
                splash
                    .push_str(text)
                    .map_err(|_| ConfigError::SplashTooLong { line })?;
                config.display.splash = splash;
            }
            (Section::Display, "splash_ms") => {
                config.display.splash_ms = parse_ranged(value, 0, MAX_SPLASH_MS, line)?;
            }
            (Section::Display, "render_interval_ms") => {
                config.display.render_interval_ms =
                    parse_ranged(value, 0, MAX_RENDER_INTERVAL_MS, line)?;
            }
            _ => return Err(ConfigError::UnknownKey { line }),
        }
    }

    Ok(config)
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_string(value: &str, line: u16) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .filter(|v| !v.contains('"'))
        .ok_or(ConfigError::InvalidValue { line })
}

fn parse_ranged(value: &str, min: u16, max: u16, line: u16) -> Result<u16, ConfigError> {
    let mut number: u32 = 0;
    let mut digits = 0;
    for c in value.chars().filter(|c| *c != '_') {
        let digit = c.to_digit(10).ok_or(ConfigError::InvalidValue { line })?;
        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or(ConfigError::OutOfRange { line })?;
        digits += 1;
    }
    if digits == 0 {
        return Err(ConfigError::InvalidValue { line });
    }
    if number < min as u32 || number > max as u32 {
        return Err(ConfigError::OutOfRange { line });
    }
    Ok(number as u16)
}
