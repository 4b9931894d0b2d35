use embedded_hal::digital::ErrorKind;
use ufmt_macros::uDebug;

/// One of the lines driven by a [crate::Controller].
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Line {
    Enable,
    Direction,
    Pulse,
    /// A negative reference line, by its index in the slice passed to
    /// [crate::Controller::power_up].
    Reference(usize),
}

/// A write to an output line failed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Error {
    /// Line which failed.
    pub line: Line,
    /// What the pin reported.
    pub kind: ErrorKind,
}
impl Error {
    /// Creates a new `Error` from a pin error on `line`.
    pub fn new<E: embedded_hal::digital::Error>(line: Line, error: E) -> Self {
        Self {
            line,
            kind: error.kind(),
        }
    }
}
