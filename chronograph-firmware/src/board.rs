//! Board pin map
//!
//! | Signal  | GPIO | Notes                         |
//! |---------|------|-------------------------------|
//! | LCD RS  | 8    |                               |
//! | LCD EN  | 9    |                               |
//! | LCD D4  | 10   | D4..D7 on consecutive pins    |
//! | LCD D7  | 13   |                               |
//! | START   | 14   | to ground, internal pull-up   |
//! | STOP    | 15   | to ground, internal pull-up   |
//! | RESET   | 16   | to ground, internal pull-up   |
//!
//! LCD R/W is tied to ground.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_time::Delay;

use chronograph_core::input::InputSampler;
use chronograph_drivers::button::GpioButton;
use chronograph_drivers::lcd::{FourBitHd44780, Hd44780Pins, LcdInitError};

pub type Lcd = FourBitHd44780<Output<'static>, Delay>;

type Button = GpioButton<Input<'static>>;

pub type Buttons = InputSampler<Button, Button, Button>;

/// Peripherals the stopwatch uses
pub struct Board {
    pub lcd: Lcd,
    pub buttons: Buttons,
}

impl Board {
    /// Claim the pins and initialize the LCD
    ///
    /// `debounce_samples` is passed to every button debouncer.
    pub fn new(p: Peripherals, debounce_samples: u16) -> Result<Self, LcdInitError> {
        let pins = Hd44780Pins {
            rs: Output::new(p.PIN_8, Level::Low),
            en: Output::new(p.PIN_9, Level::Low),
            data: [
                Output::new(p.PIN_10, Level::Low),
                Output::new(p.PIN_11, Level::Low),
                Output::new(p.PIN_12, Level::Low),
                Output::new(p.PIN_13, Level::Low),
            ],
        };

        let start = GpioButton::new_active_low(Input::new(p.PIN_14, Pull::Up));
        let stop = GpioButton::new_active_low(Input::new(p.PIN_15, Pull::Up));
        let reset = GpioButton::new_active_low(Input::new(p.PIN_16, Pull::Up));

        Ok(Self {
            lcd: FourBitHd44780::new_4bit(pins, Delay)?,
            buttons: InputSampler::new(start, stop, reset, debounce_samples),
        })
    }
}
