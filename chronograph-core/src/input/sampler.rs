//! Input sampler
//!
//! Polls the Start, Stop and Reset buttons once per main-loop iteration.
//! Each poll yields at most one event: the highest-priority button whose
//! debounced level is pressed (Reset > Stop > Start). A held button yields
//! its event on every poll; the stopwatch handlers are idempotent, so this
//! is safe.

use super::debounce::Debouncer;
use crate::state::ButtonEvent;
use crate::traits::ButtonInput;

/// Samples three buttons and resolves them into a single event
pub struct InputSampler<S, T, R> {
    start: S,
    stop: T,
    reset: R,
    /// Indexed in `ButtonEvent::ALL` order
    debouncers: [Debouncer; 3],
}

impl<S, T, R> InputSampler<S, T, R>
where
    S: ButtonInput,
    T: ButtonInput,
    R: ButtonInput,
{
    /// Create a sampler
    ///
    /// `threshold` is the number of consecutive stable samples required,
    /// see [`Debouncer::samples_for`].
    pub fn new(start: S, stop: T, reset: R, threshold: u16) -> Self {
        Self {
            start,
            stop,
            reset,
            debouncers: [
                Debouncer::new(threshold),
                Debouncer::new(threshold),
                Debouncer::new(threshold),
            ],
        }
    }

    /// Sample all buttons and return the winning event, if any
    pub fn poll(&mut self) -> Option<ButtonEvent> {
        let raw = [
            self.start.is_pressed(),
            self.stop.is_pressed(),
            self.reset.is_pressed(),
        ];

        let mut winner = None;
        for ((event, debouncer), raw) in ButtonEvent::ALL
            .iter()
            .zip(self.debouncers.iter_mut())
            .zip(raw)
        {
            // Every debouncer sees every sample, even when a higher
            // priority button already won this poll
            if debouncer.update(raw) {
                winner = Some(*event);
            }
        }
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RunMode, Stopwatch};
    use core::cell::Cell;

    struct Panel {
        start: Cell<bool>,
        stop: Cell<bool>,
        reset: Cell<bool>,
    }

    impl Panel {
        fn new() -> Self {
            Self {
                start: Cell::new(false),
                stop: Cell::new(false),
                reset: Cell::new(false),
            }
        }

        fn set(&self, start: bool, stop: bool, reset: bool) {
            self.start.set(start);
            self.stop.set(stop);
            self.reset.set(reset);
        }

        fn sampler(
            &self,
            threshold: u16,
        ) -> InputSampler<
            impl FnMut() -> bool + '_,
            impl FnMut() -> bool + '_,
            impl FnMut() -> bool + '_,
        > {
            InputSampler::new(
                move || self.start.get(),
                move || self.stop.get(),
                move || self.reset.get(),
                threshold,
            )
        }
    }

    #[test]
    fn test_no_buttons_no_event() {
        let panel = Panel::new();
        let mut sampler = panel.sampler(1);
        assert_eq!(sampler.poll(), None);
    }

    #[test]
    fn test_held_button_repeats() {
        let panel = Panel::new();
        let mut sampler = panel.sampler(1);
        panel.set(true, false, false);
        for _ in 0..10 {
            assert_eq!(sampler.poll(), Some(ButtonEvent::StartPressed));
        }
    }

    #[test]
    fn test_priority_reset_over_stop_over_start() {
        let panel = Panel::new();
        let mut sampler = panel.sampler(1);

        panel.set(true, true, false);
        assert_eq!(sampler.poll(), Some(ButtonEvent::StopPressed));

        panel.set(true, false, true);
        assert_eq!(sampler.poll(), Some(ButtonEvent::ResetPressed));

        panel.set(true, true, true);
        assert_eq!(sampler.poll(), Some(ButtonEvent::ResetPressed));
    }

    #[test]
    fn test_start_and_reset_together_resets() {
        let panel = Panel::new();
        let mut sampler = panel.sampler(1);
        let mut sw = Stopwatch::default();
        sw.on_start();
        for _ in 0..42 {
            sw.on_tick();
        }

        panel.set(true, false, true);
        if let Some(event) = sampler.poll() {
            sw.handle(event);
        }
        assert_eq!(sw.mode(), RunMode::Stopped);
        assert!(sw.elapsed().is_zero());
    }

    #[test]
    fn test_debounced_press() {
        let panel = Panel::new();
        let mut sampler = panel.sampler(3);
        panel.set(false, true, false);
        assert_eq!(sampler.poll(), None);
        assert_eq!(sampler.poll(), None);
        assert_eq!(sampler.poll(), Some(ButtonEvent::StopPressed));
    }

    #[test]
    fn test_glitch_is_ignored() {
        let panel = Panel::new();
        let mut sampler = panel.sampler(3);
        panel.set(false, false, true);
        assert_eq!(sampler.poll(), None);
        panel.set(false, false, false);
        for _ in 0..5 {
            assert_eq!(sampler.poll(), None);
        }
    }
}
