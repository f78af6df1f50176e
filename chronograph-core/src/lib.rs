//! Board-agnostic core logic for the Chronograph stopwatch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (character display, button input)
//! - Elapsed time value type and overflow policy
//! - Stopwatch state machine and its interrupt-safe shared wrapper
//! - Debounced input sampling with press priority
//! - Display frame formatting and rendering
//! - Tick overrun accounting
//! - Configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod render;
pub mod shared;
pub mod state;
pub mod tick;
pub mod time;
pub mod traits;

pub use shared::SharedStopwatch;
pub use state::{ButtonEvent, RunMode, Stopwatch};
pub use time::{ElapsedTime, OverflowPolicy};
