//! Stopwatch state machine
//!
//! Owns the elapsed time counters and the run/stopped mode.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::ButtonEvent;
pub use machine::{RunMode, Stopwatch};
