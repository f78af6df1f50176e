//! Build script for chronograph-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates stopwatch.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest splash text that fits one LCD row
const MAX_SPLASH_LEN: usize = 16;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate stopwatch.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=stopwatch.toml");

    let config_path = Path::new("stopwatch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: stopwatch.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds stopwatch.toml from the                     ║\n\
            ║  chronograph-firmware directory. Please create one.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read stopwatch.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in stopwatch.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_stopwatch(&config, &mut errors);
    validate_input(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in stopwatch.toml                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }

    println!("cargo:warning=stopwatch.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the known sections, each a table
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("Top level must be a table".to_string());
        return;
    };

    for (name, value) in table {
        match name.as_str() {
            "stopwatch" | "input" | "display" => {
                if !value.is_table() {
                    errors.push(format!("[{}] must be a section", name));
                }
            }
            _ => errors.push(format!("Unknown section or key '{}'", name)),
        }
    }
}

fn validate_stopwatch(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(section) = config.get("stopwatch").and_then(|v| v.as_table()) else {
        return;
    };

    for (key, value) in section {
        match key.as_str() {
            "overflow" => match value.as_str() {
                Some("saturate") | Some("wrap") => {}
                _ => errors.push("stopwatch.overflow must be \"saturate\" or \"wrap\"".to_string()),
            },
            _ => errors.push(format!("Unknown key stopwatch.{}", key)),
        }
    }
}

fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(section) = config.get("input").and_then(|v| v.as_table()) else {
        return;
    };

    for (key, value) in section {
        match key.as_str() {
            "debounce_ms" => check_range("input.debounce_ms", value, 0, 200, errors),
            "poll_interval_ms" => check_range("input.poll_interval_ms", value, 1, 50, errors),
            _ => errors.push(format!("Unknown key input.{}", key)),
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(section) = config.get("display").and_then(|v| v.as_table()) else {
        return;
    };

    for (key, value) in section {
        match key.as_str() {
            "splash" => match value.as_str() {
                Some(text) if !text.is_ascii() => {
                    errors.push("display.splash must be ASCII".to_string())
                }
                Some(text) if text.len() > MAX_SPLASH_LEN => errors.push(format!(
                    "display.splash is {} chars, max {}",
                    text.len(),
                    MAX_SPLASH_LEN
                )),
                Some(text) if text.contains('"') => {
                    errors.push("display.splash must not contain quotes".to_string())
                }
                Some(_) => {}
                None => errors.push("display.splash must be a string".to_string()),
            },
            "splash_ms" => check_range("display.splash_ms", value, 0, 10_000, errors),
            "render_interval_ms" => {
                check_range("display.render_interval_ms", value, 0, 1000, errors)
            }
            _ => errors.push(format!("Unknown key display.{}", key)),
        }
    }
}

fn check_range(name: &str, value: &toml::Value, min: i64, max: i64, errors: &mut Vec<String>) {
    match value.as_integer() {
        Some(v) if (min..=max).contains(&v) => {}
        Some(v) => errors.push(format!("{} = {} out of range {}..={}", name, v, min, max)),
        None => errors.push(format!("{} must be an integer", name)),
    }
}
