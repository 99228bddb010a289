//! Vehicle simulation task
//!
//! Sole owner of the vehicle state. Applies one model step per release
//! with the task period as `dt` and publishes velocity and position
//! snapshots for the control and display tasks.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tempomat_core::config::Timing;
use tempomat_core::model::VehicleState;

use crate::channels;

#[embassy_executor::task]
pub async fn vehicle_task(timing: Timing) {
    info!("Vehicle task started");

    let mut state = VehicleState::default();
    let dt_ms = timing.vehicle_period_ms as u16;
    let mut ticker = Ticker::every(Duration::from_millis(timing.vehicle_period_ms as u64));

    loop {
        let throttle = channels::THROTTLE.peek_or_default();
        let brake_pedal = channels::BRAKE_PEDAL.peek_or_default();

        state = state.step(throttle, brake_pedal, dt_ms);

        channels::VELOCITY.publish(state.velocity);
        channels::POSITION.publish(state.position);

        ticker.next().await;
    }
}
