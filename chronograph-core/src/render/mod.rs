//! Display rendering
//!
//! Formats elapsed time into a fixed-width frame and writes it to the
//! first display row.

pub mod frame;
pub mod renderer;

pub use frame::{DisplayFrame, FRAME_LEN};
pub use renderer::Renderer;
