//! Input sampling task
//!
//! Samples the pedals and the cruise toggle every period and publishes
//! all three pedal mailboxes unconditionally, so a lost publish is healed
//! one period later. On the edge that raises the cruise request, the
//! current velocity is locked in as the cruise target.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tempomat_core::config::Timing;
use tempomat_core::input::InputSampler;

use crate::board::PedalInputs;
use crate::channels;

#[embassy_executor::task]
pub async fn input_task(pedals: PedalInputs, timing: Timing) {
    info!("Input task started");

    let mut sampler = InputSampler::new(pedals.cruise_line());
    let mut ticker = Ticker::every(Duration::from_millis(timing.input_period_ms as u64));

    loop {
        let sample = sampler.sample(
            pedals.gas_pressed(),
            pedals.brake_pressed(),
            pedals.cruise_line(),
        );

        if sample.request_raised {
            // Cruise at the speed we are doing right now
            let target = channels::VELOCITY.peek_or_default();
            channels::TARGET_VELOCITY.publish(target);
            debug!("Cruise requested at {}", target);
        }

        channels::GAS_PEDAL.publish(sample.pedals.gas_pressed);
        channels::BRAKE_PEDAL.publish(sample.pedals.brake_pressed);
        channels::CRUISE_REQUEST.publish(sample.pedals.cruise_requested);

        ticker.next().await;
    }
}
