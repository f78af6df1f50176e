//! Display task
//!
//! Draws the freshest published time on the LCD. Redraws are skipped when
//! the text has not changed and optionally throttled.

use defmt::*;
use embassy_time::Timer;

use chronograph_core::render::Renderer;

use crate::board::Lcd;
use crate::channels::{RENDER_SLOT, STOPWATCH};

/// Display task - owns the LCD after the splash screen
#[embassy_executor::task]
pub async fn display_task(mut lcd: Lcd, render_interval_ms: u16) {
    info!("Display task started");

    let mut renderer = Renderer::new();

    // LCD was cleared after the splash, draw the current time right away
    let (_, elapsed) = STOPWATCH.snapshot();
    renderer.render(&mut lcd, elapsed);

    loop {
        let elapsed = RENDER_SLOT.wait().await;

        if renderer.render(&mut lcd, elapsed) {
            trace!("Rendered {}", elapsed);
        }

        if render_interval_ms > 0 {
            Timer::after_millis(render_interval_ms as u64).await;
        }
    }
}
