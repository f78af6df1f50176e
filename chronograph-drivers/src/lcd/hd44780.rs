//! HD44780 character LCD on a 4-bit parallel bus
//!
//! Thin adapter from the byte-level `CharacterDisplay` trait onto the
//! `hd44780-driver` crate, which owns the wire protocol and settle delays.
//! R/W is tied to ground, so the busy flag is never read.
//!
//! Write errors are ignored: the display is write-only and a wiring fault
//! must not stop the caller.

use chronograph_core::traits::display::{CharacterDisplay, CMD_CLEAR, CMD_SET_DDRAM_ADDR};
use embedded_hal_02::blocking::delay::{DelayMs, DelayUs};
use embedded_hal_02::digital::v2::OutputPin;
use hd44780_driver::bus::{DataBus, FourBitBus};
use hd44780_driver::{Cursor, CursorBlink, HD44780};

/// Pins used by the 4-bit bus
pub struct Hd44780Pins<P> {
    pub rs: P,
    pub en: P,
    /// D4, D5, D6, D7
    pub data: [P; 4],
}

/// The controller did not accept the init sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdInitError;

/// HD44780 display behind any `hd44780-driver` bus
pub struct Hd44780<B: DataBus, D> {
    lcd: HD44780<B>,
    delay: D,
}

/// HD44780 wired with four data lines
pub type FourBitHd44780<P, D> = Hd44780<FourBitBus<P, P, P, P, P, P>, D>;

impl<P, D> FourBitHd44780<P, D>
where
    P: OutputPin + 'static,
    D: DelayUs<u16> + DelayMs<u8>,
{
    /// Initialize the controller in 4-bit, two-line mode
    ///
    /// The display is left on with the cursor hidden.
    pub fn new_4bit(pins: Hd44780Pins<P>, mut delay: D) -> Result<Self, LcdInitError> {
        let [d4, d5, d6, d7] = pins.data;
        let mut lcd = HD44780::new_4bit(pins.rs, pins.en, d4, d5, d6, d7, &mut delay)
            .map_err(|_| LcdInitError)?;
        lcd.set_cursor_visibility(Cursor::Invisible, &mut delay)
            .map_err(|_| LcdInitError)?;
        lcd.set_cursor_blink(CursorBlink::Off, &mut delay)
            .map_err(|_| LcdInitError)?;
        Ok(Self { lcd, delay })
    }
}

impl<B, D> CharacterDisplay for Hd44780<B, D>
where
    B: DataBus,
    D: DelayUs<u16> + DelayMs<u8>,
{
    /// Supports "set DDRAM address" and "clear"; other instructions are
    /// dropped, the driver keeps its own mode state.
    fn write_command(&mut self, command: u8) {
        if command & CMD_SET_DDRAM_ADDR != 0 {
            let _ = self
                .lcd
                .set_cursor_pos(command & !CMD_SET_DDRAM_ADDR, &mut self.delay);
        } else if command == CMD_CLEAR {
            let _ = self.lcd.clear(&mut self.delay);
        }
    }

    fn write_data(&mut self, data: u8) {
        let _ = self.lcd.write_bytes(&[data], &mut self.delay);
    }

    fn write_string(&mut self, text: &str) {
        let _ = self.lcd.write_str(text, &mut self.delay);
    }
}
