//! Push button on a GPIO input
//!
//! Simple momentary switch, wired either to ground with a pull-up
//! (active-low, the usual case) or to the supply with a pull-down.

use chronograph_core::traits::ButtonInput;
use embedded_hal::digital::InputPin;

/// GPIO push button
pub struct GpioButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> GpioButton<P> {
    /// Create a new GPIO button
    ///
    /// # Arguments
    /// - `pin`: The GPIO input pin
    /// - `active_low`: If true, the button reads pressed when the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button to ground with pull-up
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Button to supply with pull-down
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: InputPin> ButtonInput for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        // A failed read counts as released
        match self.pin.is_low() {
            Ok(low) => low == self.active_low,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Mock GPIO input for testing
    struct MockPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    /// Pin whose reads always fail
    struct BrokenPin;

    #[derive(Debug)]
    struct ReadError;

    impl embedded_hal::digital::Error for ReadError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::digital::ErrorType for BrokenPin {
        type Error = ReadError;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, ReadError> {
            Err(ReadError)
        }

        fn is_low(&mut self) -> Result<bool, ReadError> {
            Err(ReadError)
        }
    }

    #[test]
    fn test_active_low_button() {
        let mut button = GpioButton::new_active_low(MockPin { high: true });
        // Pulled up, not pressed
        assert!(!button.is_pressed());

        // Pressed shorts the pin to ground
        button.pin.high = false;
        assert!(button.is_pressed());
    }

    #[test]
    fn test_active_high_button() {
        let mut button = GpioButton::new_active_high(MockPin { high: false });
        assert!(!button.is_pressed());

        button.pin.high = true;
        assert!(button.is_pressed());
    }

    #[test]
    fn test_read_error_is_released() {
        let mut button = GpioButton::new_active_low(BrokenPin);
        assert!(!button.is_pressed());
    }
}
