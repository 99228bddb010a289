//! Display task
//!
//! Pure consumer: renders the latest published state to the position bar,
//! the seven-segment readout and the pedal LEDs. Decoupled through the
//! mailboxes, so the control loop never waits on rendering.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tempomat_core::config::Timing;
use tempomat_core::display::{position_led_bits, readout};

use crate::board::{LedBank, SegmentDisplay, SharedLeds, StatusLed};
use crate::channels;

#[embassy_executor::task]
pub async fn display_task(
    mut led_bank: LedBank,
    mut segments: SegmentDisplay,
    leds: &'static SharedLeds,
    timing: Timing,
) {
    info!("Display task started");

    let mut ticker = Ticker::every(Duration::from_millis(timing.display_period_ms as u64));

    loop {
        let throttle = channels::THROTTLE.peek_or_default();
        let velocity = channels::VELOCITY.peek_or_default();
        let position = channels::POSITION.peek_or_default();

        led_bank.write(position_led_bits(position));
        segments.write(readout(throttle, velocity).as_str());

        leds.set(StatusLed::Gas, channels::GAS_PEDAL.peek_or_default());
        leds.set(StatusLed::Brake, channels::BRAKE_PEDAL.peek_or_default());
        leds.set(
            StatusLed::Cruise,
            channels::CRUISE_REQUEST.peek_or_default(),
        );

        trace!(
            "throttle={} velocity={} position={}",
            throttle,
            velocity,
            position
        );

        ticker.next().await;
    }
}
