use ufmt_macros::uDebug;

use crate::Distance;

/// Speed profile requested from the motor controller for a move.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Speed {
    /// The controller's ordinary speed limit.
    Normal,
    /// The controller's pre-configured alternate speed limit. Requested by
    /// blipping the enable line before the move.
    Alternate,
}

/// A single move request.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub struct Move {
    pub distance: Distance,
    pub speed: Speed,
}
impl Move {
    /// Creates a new `Move`.
    pub const fn new(distance: Distance, speed: Speed) -> Self {
        Self { distance, speed }
    }
}
