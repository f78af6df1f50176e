//! Chronograph - Stopwatch Firmware
//!
//! Millisecond stopwatch for RP2040 boards with an HD44780 character LCD
//! and three push buttons (Start, Stop, Reset).
//!
//! The 1 ms tick runs on a high-priority interrupt executor so it preempts
//! button polling and LCD writes, which share the thread-mode executor.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Timer;
use portable_atomic::Ordering;
use {defmt_rtt as _, panic_probe as _};

use chronograph_core::traits::display::DisplayExt;
use chronograph_core::traits::CharacterDisplay;

use crate::channels::{DROPPED_TICKS, STOPWATCH};

mod board;
mod channels;
mod config;
mod tasks;

/// Executor for the tick task, preempts the thread-mode executor
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Chronograph firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    STOPWATCH.set_overflow_policy(config.overflow);

    let board::Board { mut lcd, buttons } =
        match board::Board::new(p, config.input.debounce_samples()) {
            Ok(board) => board,
            Err(e) => panic!("LCD init failed: {}", e),
        };
    info!("LCD initialized");

    // Splash screen
    lcd.write_string(config.display.splash.as_str());
    Timer::after_millis(config.display.splash_ms as u64).await;
    // The display task starts with a fresh renderer, so its first frame
    // always writes the whole row
    lcd.clear();

    // Tick task on the high-priority executor
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(tasks::tick_task()).unwrap();

    spawner
        .spawn(tasks::input_task(buttons, config.input.poll_interval_ms))
        .unwrap();
    spawner
        .spawn(tasks::display_task(lcd, config.display.render_interval_ms))
        .unwrap();

    info!("All tasks spawned, stopwatch running");

    loop {
        Timer::after_secs(60).await;
        let (mode, elapsed) = STOPWATCH.snapshot();
        trace!(
            "Main loop heartbeat: {} at {}, {} ticks dropped",
            mode,
            elapsed,
            DROPPED_TICKS.load(Ordering::Relaxed)
        );
    }
}
