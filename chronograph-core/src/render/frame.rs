//! Display frame formatting
//!
//! Frame format: `Time MM:SS:mmm`. Minutes are zero-padded to two digits
//! and widen past 99; seconds are two digits and milliseconds three.

use core::fmt::Write;

use heapless::String;

use crate::time::ElapsedTime;

/// Longest possible frame, `"Time 9999:59:999"`
pub const FRAME_LEN: usize = 16;

/// A formatted line of display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    text: String<FRAME_LEN>,
}

impl DisplayFrame {
    /// Format an elapsed time
    pub fn from_time(time: ElapsedTime) -> Self {
        let mut text = String::new();
        // Cannot overflow: minutes are bounded to four digits
        let _ = write!(
            text,
            "Time {:02}:{:02}:{:03}",
            time.minutes(),
            time.seconds(),
            time.milliseconds()
        );
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(minutes: u16, seconds: u8, milliseconds: u16) -> DisplayFrame {
        DisplayFrame::from_time(ElapsedTime::new(minutes, seconds, milliseconds).unwrap())
    }

    #[test]
    fn test_zero() {
        assert_eq!(DisplayFrame::from_time(ElapsedTime::ZERO).as_str(), "Time 00:00:000");
    }

    #[test]
    fn test_padding() {
        assert_eq!(frame(2, 5, 7).as_str(), "Time 02:05:007");
        assert_eq!(frame(12, 34, 560).as_str(), "Time 12:34:560");
    }

    #[test]
    fn test_minutes_widen() {
        assert_eq!(frame(100, 0, 0).as_str(), "Time 100:00:000");
        assert_eq!(DisplayFrame::from_time(ElapsedTime::MAX).as_str(), "Time 9999:59:999");
        assert_eq!(DisplayFrame::from_time(ElapsedTime::MAX).as_str().len(), FRAME_LEN);
    }
}
