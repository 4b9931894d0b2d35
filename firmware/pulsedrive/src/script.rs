use ufmt_macros::uDebug;

use crate::{Distance, Move, Speed};

/// One step of a scripted sequence.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Execute a move.
    Move(Move),
    /// Wait for one dwell period.
    Dwell,
}

const fn normal(pulses: i32) -> Action {
    Action::Move(Move::new(Distance::new(pulses), Speed::Normal))
}

const fn alternate(pulses: i32) -> Action {
    Action::Move(Move::new(Distance::new(pulses), Speed::Alternate))
}

/// Demonstration sequence, run once per pass of the firmware's main loop.
///
/// Moves listed back-to-back without a [Action::Dwell] between them leave
/// the pulse line running continuously; the motor controller sees one
/// pulse stream and executes it as two chained moves.
///
/// The net distance is zero, so every pass starts from the same place.
pub const DEMO_SCRIPT: &[Action] = &[
    normal(6400),
    Action::Dwell,
    normal(-6400),
    Action::Dwell,
    alternate(-2000),
    Action::Dwell,
    alternate(2000),
    Action::Dwell,
    // Chained.
    normal(3200),
    normal(3200),
    Action::Dwell,
    alternate(-12800),
    Action::Dwell,
    // Chained, reversing half way.
    normal(3200),
    normal(-3200),
    Action::Dwell,
    normal(6400),
    Action::Dwell,
];
