//! Button input sampling
//!
//! Turns raw, possibly bouncing button levels into clean stopwatch events.

pub mod debounce;
pub mod sampler;

pub use debounce::{DebounceState, Debouncer};
pub use sampler::InputSampler;
