//! Button input trait

/// A momentary push button
///
/// Implementations hide the electrical polarity: `is_pressed` returns the
/// logical state (for the usual active-low wiring, `true` when the pin
/// reads low).
pub trait ButtonInput {
    /// Sample the button
    fn is_pressed(&mut self) -> bool;
}

impl<F: FnMut() -> bool> ButtonInput for F {
    fn is_pressed(&mut self) -> bool {
        self()
    }
}
