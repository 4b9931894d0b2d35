use ufmt_macros::uDebug;

/// Underlying type representing a signed distance.
type DistanceRepr = i32;

/// Signed distance of a move, in pulses.
///
/// Each pulse is one unit of incremental distance for the motor controller.
/// The sign selects the direction of travel.
#[derive(Debug, uDebug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Distance(DistanceRepr);
impl Distance {
    /// Creates a new `Distance`.
    pub const fn new(pulses: DistanceRepr) -> Self {
        Self(pulses)
    }

    /// Zero distance.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the value represented by `Distance`.
    pub fn get_value(&self) -> DistanceRepr {
        self.0
    }

    /// Returns the number of pulses needed to cover the distance.
    ///
    /// This is defined for every value, including `i32::MIN`.
    pub fn pulses(&self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Returns `true` if the distance is less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `true` if the distance is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}
