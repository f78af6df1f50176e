//! Renderer
//!
//! Writes frames to row 0, column 0. The last frame written is kept so an
//! identical frame costs no display traffic.

use super::frame::{DisplayFrame, FRAME_LEN};
use crate::time::ElapsedTime;
use crate::traits::display::{CharacterDisplay, DisplayExt};

/// Stopwatch renderer
#[derive(Debug, Default)]
pub struct Renderer {
    last: Option<DisplayFrame>,
}

impl Renderer {
    /// Create a renderer that will draw on its first call
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last frame so the next render always writes
    ///
    /// Call after anything else has drawn over the time row.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `time` on the display
    ///
    /// Returns `true` if anything was written.
    pub fn render<D: CharacterDisplay>(&mut self, display: &mut D, time: ElapsedTime) -> bool {
        let frame = DisplayFrame::from_time(time);
        if self.last.as_ref() == Some(&frame) {
            return false;
        }

        display.set_cursor(0, 0);
        display.write_string(frame.as_str());

        // A shorter frame (after a reset from 100+ minutes) leaves stale
        // characters behind; blank them. With no last frame the row content
        // is unknown, so blank up to the widest frame.
        let previous_len = self
            .last
            .as_ref()
            .map_or(FRAME_LEN, |f| f.as_str().len());
        for _ in frame.as_str().len()..previous_len {
            display.write_data(b' ');
        }

        self.last = Some(frame);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::display::CMD_SET_DDRAM_ADDR;

    /// Mock display recording the visible first row
    struct MockLcd {
        row: [u8; 16],
        cursor: usize,
        commands: usize,
        writes: usize,
    }

    impl MockLcd {
        fn new() -> Self {
            Self {
                row: [b' '; 16],
                cursor: 0,
                commands: 0,
                writes: 0,
            }
        }

        fn text(&self) -> &str {
            core::str::from_utf8(&self.row).unwrap().trim_end()
        }
    }

    impl CharacterDisplay for MockLcd {
        fn write_command(&mut self, command: u8) {
            self.commands += 1;
            if command & CMD_SET_DDRAM_ADDR != 0 {
                self.cursor = (command & 0x3F) as usize;
            }
        }

        fn write_data(&mut self, data: u8) {
            self.writes += 1;
            if self.cursor < self.row.len() {
                self.row[self.cursor] = data;
            }
            self.cursor += 1;
        }
    }

    fn time(minutes: u16, seconds: u8, milliseconds: u16) -> ElapsedTime {
        ElapsedTime::new(minutes, seconds, milliseconds).unwrap()
    }

    #[test]
    fn test_renders_at_home_position() {
        let mut lcd = MockLcd::new();
        let mut renderer = Renderer::new();
        lcd.cursor = 9;
        assert!(renderer.render(&mut lcd, time(2, 5, 7)));
        assert_eq!(lcd.text(), "Time 02:05:007");
    }

    #[test]
    fn test_identical_frame_skipped() {
        let mut lcd = MockLcd::new();
        let mut renderer = Renderer::new();
        assert!(renderer.render(&mut lcd, ElapsedTime::ZERO));
        let writes = lcd.writes;
        assert!(!renderer.render(&mut lcd, ElapsedTime::ZERO));
        assert_eq!(lcd.writes, writes);
    }

    #[test]
    fn test_invalidate_forces_write() {
        let mut lcd = MockLcd::new();
        let mut renderer = Renderer::new();
        renderer.render(&mut lcd, ElapsedTime::ZERO);
        renderer.invalidate();
        assert!(renderer.render(&mut lcd, ElapsedTime::ZERO));
        assert_eq!(lcd.commands, 2);
    }

    #[test]
    fn test_invalidate_then_shorter_frame_blanks_tail() {
        let mut lcd = MockLcd::new();
        let mut renderer = Renderer::new();
        renderer.render(&mut lcd, time(123, 4, 5));
        renderer.invalidate();
        renderer.render(&mut lcd, ElapsedTime::ZERO);
        assert_eq!(&lcd.row, b"Time 00:00:000  ");
    }

    #[test]
    fn test_first_render_blanks_unknown_row() {
        let mut lcd = MockLcd::new();
        lcd.row = *b"Stopwatch Ready!";
        let mut renderer = Renderer::new();
        renderer.render(&mut lcd, ElapsedTime::ZERO);
        assert_eq!(&lcd.row, b"Time 00:00:000  ");
        assert_eq!(lcd.writes, FRAME_LEN);
    }

    #[test]
    fn test_shorter_frame_blanks_tail() {
        let mut lcd = MockLcd::new();
        let mut renderer = Renderer::new();
        renderer.render(&mut lcd, time(123, 4, 5));
        assert_eq!(lcd.text(), "Time 123:04:005");
        renderer.render(&mut lcd, ElapsedTime::ZERO);
        assert_eq!(lcd.text(), "Time 00:00:000");
    }
}
