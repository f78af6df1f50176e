//! Hardware abstraction traits
//!
//! These traits define the interface between the stopwatch logic
//! and hardware-specific implementations.

pub mod display;
pub mod input;

pub use display::CharacterDisplay;
pub use input::ButtonInput;
