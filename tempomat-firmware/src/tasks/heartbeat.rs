//! Overload detection task
//!
//! The heartbeat producer: the lowest-priority periodic task in the
//! system. Each release that actually runs means every higher-priority
//! task got the CPU it needed, so the signal doubles as a statement that
//! a full scheduling cycle completed. When the load generator saturates
//! the CPU, this task is the first to starve and the token stops flowing.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tempomat_core::config::Timing;

use crate::channels;

#[embassy_executor::task]
pub async fn heartbeat_task(timing: Timing) {
    info!("Overload detection task started");

    let mut ticker = Ticker::every(Duration::from_millis(timing.heartbeat_period_ms as u64));

    // Arm the watchdog only once we are actually running
    channels::MONITOR_READY.complete();

    loop {
        channels::HEARTBEAT.signal();
        ticker.next().await;
    }
}
