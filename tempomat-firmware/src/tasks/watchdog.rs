//! Watchdog task
//!
//! Highest priority in the system, so the timeout check itself can never
//! be starved. Consumes the heartbeat token with a bounded wait: a
//! timeout means the heartbeat producer missed ten consecutive periods
//! and the system is overloaded. The alarm is the all-LEDs-on pattern;
//! the next consumed token clears it.

use defmt::*;
use embassy_time::{Duration, Timer};

use tempomat_core::config::Timing;
use tempomat_core::monitor::OverloadMonitor;

use crate::board::SharedLeds;
use crate::channels;

#[embassy_executor::task]
pub async fn watchdog_task(leds: &'static SharedLeds, timing: Timing) {
    info!("Watchdog task started");

    // Do not count boot time against the first timeout window
    channels::MONITOR_READY.join().await;

    let mut monitor = OverloadMonitor::new();
    let timeout = Duration::from_millis(timing.watchdog_timeout_ms as u64);
    let backoff = Duration::from_millis(timing.watchdog_backoff_ms as u64);

    loop {
        if channels::HEARTBEAT.wait_consume(timeout).await {
            if monitor.note_heartbeat() {
                info!("Watchdog: heartbeat restored, clearing overload");
                leds.set_all(false);
            }
        } else if monitor.note_timeout() {
            warn!("Watchdog: system overload detected");
            leds.set_all(true);
        }

        // Keep the loop from spinning when tokens are already pending
        Timer::after(backoff).await;
    }
}
