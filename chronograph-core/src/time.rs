//! Elapsed time value type
//!
//! `ElapsedTime` is kept normalized at all times: a carry out of one field
//! is applied to the next within the same call, so no reader ever observes
//! `milliseconds == 1000` or `seconds == 60`.

/// Milliseconds per second
pub const MILLIS_PER_SECOND: u16 = 1000;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Largest representable minutes value
///
/// `"Time 9999:59:999"` is exactly 16 characters, one full LCD row.
pub const MAX_MINUTES: u16 = 9999;

/// What happens when the counter reaches `MAX_MINUTES:59:999`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverflowPolicy {
    /// Hold at the maximum value; further ticks are no-ops
    #[default]
    Saturate,
    /// Roll over to zero and keep counting
    Wrap,
}

/// Elapsed stopwatch time
///
/// Field order matters: the derived ordering is lexicographic over
/// (minutes, seconds, milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTime {
    minutes: u16,
    seconds: u8,
    milliseconds: u16,
}

impl ElapsedTime {
    /// Zero elapsed time
    pub const ZERO: Self = Self {
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    };

    /// Largest representable elapsed time
    pub const MAX: Self = Self {
        minutes: MAX_MINUTES,
        seconds: SECONDS_PER_MINUTE - 1,
        milliseconds: MILLIS_PER_SECOND - 1,
    };

    /// Build an elapsed time from its fields
    ///
    /// Returns `None` if any field is outside its range.
    pub const fn new(minutes: u16, seconds: u8, milliseconds: u16) -> Option<Self> {
        if minutes > MAX_MINUTES
            || seconds >= SECONDS_PER_MINUTE
            || milliseconds >= MILLIS_PER_SECOND
        {
            return None;
        }
        Some(Self {
            minutes,
            seconds,
            milliseconds,
        })
    }

    pub fn minutes(&self) -> u16 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    /// Check if this is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Advance by one millisecond, carrying into seconds and minutes
    ///
    /// Returns `true` if the value changed. At `ElapsedTime::MAX` the
    /// policy decides between holding (no change) and rolling to zero.
    pub fn advance(&mut self, policy: OverflowPolicy) -> bool {
        if *self == Self::MAX {
            return match policy {
                OverflowPolicy::Saturate => false,
                OverflowPolicy::Wrap => {
                    *self = Self::ZERO;
                    true
                }
            };
        }

        self.milliseconds += 1;
        if self.milliseconds >= MILLIS_PER_SECOND {
            self.milliseconds = 0;
            self.seconds += 1;
            if self.seconds >= SECONDS_PER_MINUTE {
                self.seconds = 0;
                self.minutes += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(ElapsedTime::new(0, 60, 0).is_none());
        assert!(ElapsedTime::new(0, 0, 1000).is_none());
        assert!(ElapsedTime::new(MAX_MINUTES + 1, 0, 0).is_none());
        assert!(ElapsedTime::new(MAX_MINUTES, 59, 999).is_some());
    }

    #[test]
    fn test_millisecond_carry() {
        let mut t = ElapsedTime::new(0, 0, 999).unwrap();
        assert!(t.advance(OverflowPolicy::Saturate));
        assert_eq!(t, ElapsedTime::new(0, 1, 0).unwrap());
    }

    #[test]
    fn test_second_carry() {
        let mut t = ElapsedTime::new(3, 59, 999).unwrap();
        assert!(t.advance(OverflowPolicy::Saturate));
        assert_eq!(t, ElapsedTime::new(4, 0, 0).unwrap());
    }

    #[test]
    fn test_saturate_holds_at_max() {
        let mut t = ElapsedTime::MAX;
        assert!(!t.advance(OverflowPolicy::Saturate));
        assert_eq!(t, ElapsedTime::MAX);
    }

    #[test]
    fn test_wrap_rolls_to_zero() {
        let mut t = ElapsedTime::MAX;
        assert!(t.advance(OverflowPolicy::Wrap));
        assert!(t.is_zero());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = ElapsedTime::new(0, 59, 999).unwrap();
        let b = ElapsedTime::new(1, 0, 0).unwrap();
        let c = ElapsedTime::new(1, 0, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
