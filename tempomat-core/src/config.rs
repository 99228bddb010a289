//! Timing configuration
//!
//! All periods and timeouts in one place, with defaults matching the lab
//! kit reference timing. Validated together with the priority table at
//! startup (`sched::validate`).

/// Task periods and watchdog timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Pedal/switch sampling period
    pub input_period_ms: u32,
    /// Control-law period
    pub control_period_ms: u32,
    /// Vehicle model step period; also the model `dt`
    pub vehicle_period_ms: u32,
    /// Display refresh period
    pub display_period_ms: u32,
    /// Heartbeat (overload detection) period
    pub heartbeat_period_ms: u32,
    /// Load generator period; also its maximum burn window
    pub extra_load_period_ms: u32,
    /// Watchdog token wait; ten missed heartbeats at the default rates
    pub watchdog_timeout_ms: u32,
    /// Watchdog sleep between wait attempts
    pub watchdog_backoff_ms: u32,
}

impl Timing {
    pub const fn new() -> Self {
        Self {
            input_period_ms: 50,
            control_period_ms: 200,
            vehicle_period_ms: 100,
            display_period_ms: 500,
            heartbeat_period_ms: 100,
            extra_load_period_ms: 25,
            watchdog_timeout_ms: 1000,
            watchdog_backoff_ms: 10,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchdog_timeout_covers_ten_heartbeats() {
        let timing = Timing::default();
        assert_eq!(
            timing.watchdog_timeout_ms,
            10 * timing.heartbeat_period_ms
        );
    }

    #[test]
    fn test_model_dt_is_the_vehicle_period() {
        assert_eq!(Timing::default().vehicle_period_ms, 100);
    }
}
