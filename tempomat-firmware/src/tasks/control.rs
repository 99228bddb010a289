//! Throttle control task
//!
//! Reads the pedal, velocity and target mailboxes each period, runs the
//! control law, and publishes the throttle command. The yellow LED shows
//! cruise engagement on every release.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tempomat_core::config::Timing;
use tempomat_core::control::{ControlInput, ThrottleController};
use tempomat_core::input::PedalState;

use crate::board::{SharedLeds, StatusLed};
use crate::channels;

#[embassy_executor::task]
pub async fn control_task(leds: &'static SharedLeds, timing: Timing) {
    info!("Control task started");

    let mut controller = ThrottleController::new();
    let mut ticker = Ticker::every(Duration::from_millis(timing.control_period_ms as u64));

    loop {
        let input = ControlInput {
            pedals: PedalState {
                gas_pressed: channels::GAS_PEDAL.peek_or_default(),
                brake_pressed: channels::BRAKE_PEDAL.peek_or_default(),
                cruise_requested: channels::CRUISE_REQUEST.peek_or_default(),
            },
            velocity: channels::VELOCITY.peek_or_default(),
            target_velocity: channels::TARGET_VELOCITY.peek_or_default(),
        };

        let decision = controller.update(input);

        if let Some(target) = decision.engaged_target {
            // Engagement re-snapshots the target at the current speed
            channels::TARGET_VELOCITY.publish(target);
            debug!("Cruise engaged, target {}", target);
        }

        channels::THROTTLE.publish(decision.throttle);
        leds.set(StatusLed::Cruise, decision.cruise_active);

        ticker.next().await;
    }
}
