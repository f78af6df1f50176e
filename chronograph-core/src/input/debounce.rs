//! Per-button debouncer
//!
//! A level must be seen on `threshold` consecutive samples before it is
//! accepted. The output is a level, not an edge: a held button stays
//! pressed for as long as it is held.

/// Debouncer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Released and stable
    Idle,
    /// Pressed level seen, not yet stable
    Debouncing { count: u16 },
    /// Pressed and stable
    Pressed,
    /// Released level seen while pressed, not yet stable
    Releasing { count: u16 },
}

/// Debouncer for a single button
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
    threshold: u16,
}

impl Debouncer {
    /// Create a debouncer requiring `threshold` stable samples
    ///
    /// A threshold of 0 or 1 accepts every sample as-is.
    pub const fn new(threshold: u16) -> Self {
        Self {
            state: DebounceState::Idle,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Number of samples needed to cover `debounce_ms` when polling every
    /// `poll_interval_ms`
    pub fn samples_for(debounce_ms: u16, poll_interval_ms: u16) -> u16 {
        let poll = poll_interval_ms.max(1);
        debounce_ms.div_ceil(poll)
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        matches!(
            self.state,
            DebounceState::Pressed | DebounceState::Releasing { .. }
        )
    }

    /// Feed one raw sample and return the debounced level
    pub fn update(&mut self, raw_pressed: bool) -> bool {
        use DebounceState::*;

        self.state = match (self.state, raw_pressed) {
            (Idle, true) => self.settle(1, Pressed, |count| Debouncing { count }),
            (Idle, false) => Idle,

            (Debouncing { count }, true) => {
                self.settle(count + 1, Pressed, |count| Debouncing { count })
            }
            // Bounce: back to idle
            (Debouncing { .. }, false) => Idle,

            (Pressed, true) => Pressed,
            (Pressed, false) => self.settle(1, Idle, |count| Releasing { count }),

            (Releasing { count }, false) => {
                self.settle(count + 1, Idle, |count| Releasing { count })
            }
            // Bounce: still pressed
            (Releasing { .. }, true) => Pressed,
        };

        self.is_pressed()
    }

    fn settle(
        &self,
        count: u16,
        stable: DebounceState,
        pending: impl FnOnce(u16) -> DebounceState,
    ) -> DebounceState {
        if count >= self.threshold {
            stable
        } else {
            pending(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_is_passthrough() {
        let mut d = Debouncer::new(0);
        assert!(d.update(true));
        assert!(!d.update(false));
        assert!(d.update(true));
    }

    #[test]
    fn test_requires_stable_samples() {
        let mut d = Debouncer::new(3);
        assert!(!d.update(true));
        assert!(!d.update(true));
        assert!(d.update(true));
        assert_eq!(d.state(), DebounceState::Pressed);
    }

    #[test]
    fn test_bounce_rejected_on_press() {
        let mut d = Debouncer::new(3);
        d.update(true);
        d.update(true);
        assert!(!d.update(false));
        assert_eq!(d.state(), DebounceState::Idle);
        assert!(!d.update(true));
    }

    #[test]
    fn test_held_button_stays_pressed() {
        let mut d = Debouncer::new(2);
        d.update(true);
        d.update(true);
        for _ in 0..100 {
            assert!(d.update(true));
        }
    }

    #[test]
    fn test_bounce_rejected_on_release() {
        let mut d = Debouncer::new(3);
        for _ in 0..3 {
            d.update(true);
        }
        assert!(d.update(false));
        assert!(d.update(false));
        // Glitch back to pressed keeps the press
        assert!(d.update(true));
        assert_eq!(d.state(), DebounceState::Pressed);

        d.update(false);
        d.update(false);
        assert!(!d.update(false));
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn test_samples_for() {
        assert_eq!(Debouncer::samples_for(20, 1), 20);
        assert_eq!(Debouncer::samples_for(20, 3), 7);
        assert_eq!(Debouncer::samples_for(0, 1), 0);
        assert_eq!(Debouncer::samples_for(10, 0), 10);
    }
}
