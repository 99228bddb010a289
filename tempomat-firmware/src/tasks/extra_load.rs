//! Synthetic load generator task
//!
//! Operator-controlled CPU burn: the eight load switches select a level
//! X, and each 25 ms release busy-waits X/10 milliseconds at a priority
//! above the whole control graph. At full scale that is a 100% duty
//! cycle, which starves the heartbeat producer and exercises the
//! watchdog's failure path. The burn must not yield or sleep: its entire
//! purpose is to hold the processor.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use tempomat_core::config::Timing;
use tempomat_core::monitor::burn_millis;

use crate::board::LoadSwitches;

#[embassy_executor::task]
pub async fn extra_load_task(switches: LoadSwitches, timing: Timing) {
    info!("Extra load task started");

    let mut ticker = Ticker::every(Duration::from_millis(timing.extra_load_period_ms as u64));

    loop {
        let level = switches.level();
        let burn = burn_millis(level);
        if burn > 0 {
            busy_wait(Duration::from_millis(burn as u64));
        }

        ticker.next().await;
    }
}

/// Spin until `duration` has elapsed, without releasing the processor.
fn busy_wait(duration: Duration) {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        core::hint::spin_loop();
    }
}
