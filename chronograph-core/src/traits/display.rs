//! Character display trait
//!
//! The display owns its wire protocol and settle delays. Writes report no
//! failure: a missing or miswired display must never stall timekeeping.

/// HD44780 "clear display" instruction
pub const CMD_CLEAR: u8 = 0x01;

/// HD44780 "set DDRAM address" instruction (OR with the address)
pub const CMD_SET_DDRAM_ADDR: u8 = 0x80;

/// DDRAM address of the first column on each row
pub const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Visible columns per row
pub const DISPLAY_COLS: u8 = 16;

/// Trait for byte-level character display access
pub trait CharacterDisplay {
    /// Send an instruction byte
    fn write_command(&mut self, command: u8);

    /// Send a character byte at the current cursor position
    fn write_data(&mut self, data: u8);

    /// Send each byte of `text` in sequence
    fn write_string(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_data(byte);
        }
    }
}

/// Helper methods for positioning and clearing
pub trait DisplayExt: CharacterDisplay {
    /// Clear the screen and home the cursor
    fn clear(&mut self) {
        self.write_command(CMD_CLEAR);
    }

    /// Move the cursor to `row` (0-1), `col` (0-15)
    ///
    /// Out-of-range positions are clamped to the last row or column.
    fn set_cursor(&mut self, row: u8, col: u8) {
        let row = (row as usize).min(ROW_OFFSETS.len() - 1);
        let col = col.min(DISPLAY_COLS - 1);
        self.write_command(CMD_SET_DDRAM_ADDR | (ROW_OFFSETS[row] + col));
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<u8>,
        data: Vec<u8>,
    }

    impl CharacterDisplay for Recorder {
        fn write_command(&mut self, command: u8) {
            self.commands.push(command);
        }

        fn write_data(&mut self, data: u8) {
            self.data.push(data);
        }
    }

    #[test]
    fn test_write_string_sends_each_byte() {
        let mut d = Recorder::default();
        d.write_string("Ab1");
        assert_eq!(d.data, b"Ab1");
        assert!(d.commands.is_empty());
    }

    #[test]
    fn test_set_cursor() {
        let mut d = Recorder::default();
        d.set_cursor(0, 0);
        d.set_cursor(1, 3);
        d.set_cursor(7, 0);
        d.set_cursor(0, 40);
        assert_eq!(d.commands, [0x80, 0xC3, 0xC0, 0x8F]);
    }

    #[test]
    fn test_clear() {
        let mut d = Recorder::default();
        d.clear();
        assert_eq!(d.commands, [CMD_CLEAR]);
    }
}
