//! Button polling task

use defmt::*;
use embassy_time::{Duration, Ticker};

use chronograph_core::ButtonEvent;

use crate::board::Buttons;
use crate::channels::{RENDER_SLOT, STOPWATCH};

/// Poll the buttons and feed the winning event to the stopwatch
///
/// A held button is applied on every poll; only changes are logged.
#[embassy_executor::task]
pub async fn input_task(mut buttons: Buttons, poll_interval_ms: u16) {
    info!("Input task started (poll every {}ms)", poll_interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(poll_interval_ms.max(1) as u64));
    let mut last: Option<ButtonEvent> = None;

    loop {
        ticker.next().await;

        let event = buttons.poll();
        if event != last {
            debug!("Buttons: {} -> {}", last, event);
            last = event;
        }

        let Some(event) = event else {
            continue;
        };

        if let Some(cleared) = STOPWATCH.apply(event) {
            RENDER_SLOT.signal(cleared);
        }
    }
}
