use crate::{DirectionSense, MicroSeconds, MilliSeconds};

/// Timing and wiring configuration for a [crate::Controller].
///
/// Every field is fixed when the firmware is built; construct it with the
/// `const fn`s so it can live in a `const`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Config {
    dwell: MilliSeconds,
    homing_wait: MilliSeconds,
    min_alt_pulse: MilliSeconds,
    sense: DirectionSense,
    pulse_hold: MicroSeconds,
}
impl Config {
    /// Creates a new `Config` with no pulse hold time.
    ///
    /// # Parameters
    ///
    /// - `dwell`: Pause between scripted moves, and during power-up.
    /// - `homing_wait`: Time allowed for the motor controller to home after
    ///   it is enabled.
    /// - `min_alt_pulse`: Shortest enable blip the motor controller accepts
    ///   as an alternate speed request.
    /// - `sense`: Relationship between distance sign and the direction line.
    pub const fn new(
        dwell: MilliSeconds,
        homing_wait: MilliSeconds,
        min_alt_pulse: MilliSeconds,
        sense: DirectionSense,
    ) -> Self {
        Self {
            dwell,
            homing_wait,
            min_alt_pulse,
            sense,
            pulse_hold: MicroSeconds::zero(),
        }
    }

    /// Returns a copy of this configuration that holds each pulse level for
    /// `pulse_hold`.
    ///
    /// With a zero hold the pulse line is toggled as fast as two writes
    /// allow. Use a hold when that is faster than the motor controller's
    /// maximum input frequency.
    pub const fn with_pulse_hold(self, pulse_hold: MicroSeconds) -> Self {
        Self { pulse_hold, ..self }
    }

    pub fn dwell(&self) -> MilliSeconds {
        self.dwell
    }

    pub fn homing_wait(&self) -> MilliSeconds {
        self.homing_wait
    }

    pub fn min_alt_pulse(&self) -> MilliSeconds {
        self.min_alt_pulse
    }

    pub fn sense(&self) -> DirectionSense {
        self.sense
    }

    pub fn pulse_hold(&self) -> MicroSeconds {
        self.pulse_hold
    }

    /// Time each level of the alternate speed enable blip is held.
    ///
    /// This is one and a half times `min_alt_pulse`, rounded up.
    pub fn alt_speed_hold(&self) -> MilliSeconds {
        self.min_alt_pulse.one_and_a_half()
    }
}
