//! Throttle control law and cruise engagement
//!
//! The controller keeps its throttle and cruise state across releases;
//! everything else is re-read from the mailboxes each period.

use crate::input::PedalState;

/// Throttle increment per release while the gas pedal is held.
pub const GAS_STEP: u16 = 2;

/// Throttle correction per release while cruise is chasing its target.
pub const CRUISE_STEP: u16 = 3;

/// Velocity error band (0.1 m/s) within which cruise holds the throttle
/// unchanged, so the controller does not hunt around the target.
pub const CRUISE_DEADBAND: i16 = 40;

/// Minimum velocity (0.1 m/s) at which cruise may engage.
pub const VELOCITY_CRUISE_THRESHOLD: i16 = 250;

/// Throttle actuator ceiling.
pub const MAX_THROTTLE: u16 = 80;

/// Inputs read from the mailboxes for one control release.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlInput {
    pub pedals: PedalState,
    pub velocity: i16,
    pub target_velocity: i16,
}

/// Outcome of one control release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlDecision {
    pub throttle: u16,
    pub cruise_active: bool,
    /// Set when cruise engaged on this release: the velocity locked in as
    /// the new target, to be published back to the target mailbox.
    pub engaged_target: Option<i16>,
}

/// Persistent control-task state.
#[derive(Debug)]
pub struct ThrottleController {
    throttle: u16,
    cruise_active: bool,
}

impl ThrottleController {
    pub const fn new() -> Self {
        Self {
            throttle: 0,
            cruise_active: false,
        }
    }

    pub fn throttle(&self) -> u16 {
        self.throttle
    }

    pub fn cruise_active(&self) -> bool {
        self.cruise_active
    }

    /// Run one control release.
    ///
    /// Engagement locks in the speed at the moment all preconditions hold,
    /// not at the button edge: a request raised below the threshold
    /// engages later, at the then-current velocity.
    pub fn update(&mut self, input: ControlInput) -> ControlDecision {
        let PedalState {
            gas_pressed,
            brake_pressed,
            cruise_requested,
        } = input.pedals;

        let mut engaged_target = None;
        let mut target_velocity = input.target_velocity;

        if brake_pressed || gas_pressed {
            // Cruise cannot coexist with manual input.
            self.cruise_active = false;
        } else if cruise_requested && input.velocity >= VELOCITY_CRUISE_THRESHOLD {
            if !self.cruise_active {
                self.cruise_active = true;
                target_velocity = input.velocity;
                engaged_target = Some(input.velocity);
            }
        } else {
            self.cruise_active = false;
        }

        if brake_pressed {
            self.throttle = 0;
        } else if gas_pressed {
            self.throttle = (self.throttle + GAS_STEP).min(MAX_THROTTLE);
        } else if self.cruise_active {
            let error = target_velocity - input.velocity;
            if error > CRUISE_DEADBAND {
                self.throttle = (self.throttle + CRUISE_STEP).min(MAX_THROTTLE);
            } else if error < -CRUISE_DEADBAND {
                self.throttle = self.throttle.saturating_sub(CRUISE_STEP);
            }
            // Inside the dead-band the throttle holds.
        } else {
            self.throttle = 0;
        }

        ControlDecision {
            throttle: self.throttle,
            cruise_active: self.cruise_active,
            engaged_target,
        }
    }
}

impl Default for ThrottleController {
    fn default() -> Self {
        Self::new()
    }
}
