use ufmt_macros::uDebug;

/// Time in milliseconds.
#[derive(Debug, uDebug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MilliSeconds(u32);
impl MilliSeconds {
    /// Creates a new `MilliSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }

    /// Scales the time by one and a half, rounding up to the next whole
    /// millisecond.
    ///
    /// Rounding up means the result is never shorter than 1.5 times the
    /// original. Saturates at `u32::MAX`.
    pub fn one_and_a_half(&self) -> Self {
        let scaled = (self.0 as u64 * 3).div_ceil(2);
        Self(u32::try_from(scaled).unwrap_or(u32::MAX))
    }
}
