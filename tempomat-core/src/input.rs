//! Pedal sampling and cruise-toggle edge detection
//!
//! Gas and brake are level-sensed every sample. The cruise button is
//! edge-sensed on its raw line: one press (a falling transition) flips
//! the request. A pressed brake overrides the toggle state outright.

/// Pedal and cruise-request state published by the input task each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PedalState {
    pub gas_pressed: bool,
    pub brake_pressed: bool,
    pub cruise_requested: bool,
}

/// Result of one input sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    pub pedals: PedalState,
    /// True only on the edge that raised the cruise request; the input
    /// task snapshots the current velocity as the cruise target on it.
    pub request_raised: bool,
}

/// Edge detector for the cruise toggle, fed one raw sample per release.
#[derive(Debug)]
pub struct InputSampler {
    prev_cruise_line: bool,
    cruise_requested: bool,
}

impl InputSampler {
    /// `initial_cruise_line` is the raw level read once at startup, so an
    /// already-low line at boot does not count as a press.
    pub const fn new(initial_cruise_line: bool) -> Self {
        Self {
            prev_cruise_line: initial_cruise_line,
            cruise_requested: false,
        }
    }

    /// Process one sample. `gas_pressed`/`brake_pressed` are logical
    /// levels; `cruise_line` is the raw line (idle high, low while held).
    pub fn sample(&mut self, gas_pressed: bool, brake_pressed: bool, cruise_line: bool) -> InputSample {
        let mut request_raised = false;

        // Falling transition relative to the previous sample toggles the
        // request; holding the button low does not retrigger.
        if cruise_line != self.prev_cruise_line && !cruise_line {
            self.cruise_requested = !self.cruise_requested;
            request_raised = self.cruise_requested;
        }
        self.prev_cruise_line = cruise_line;

        // Brake always wins over the toggle.
        if brake_pressed {
            self.cruise_requested = false;
            request_raised = false;
        }

        InputSample {
            pedals: PedalState {
                gas_pressed,
                brake_pressed,
                cruise_requested: self.cruise_requested,
            },
            request_raised,
        }
    }
}
