use ufmt_macros::uDebug;

/// Time in microseconds.
#[derive(Debug, uDebug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MicroSeconds(u32);
impl MicroSeconds {
    /// Creates a new `MicroSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Zero microseconds.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }

    /// Returns `true` if this is no time at all.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
