//! Recording fakes for the line and delay traits.
//!
//! Every pin write and every wait is appended to one shared log, so tests can
//! assert on the exact interleaving of writes and waits across lines.

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};
use std::sync::{Arc, Mutex};

use crate::Line;

/// Something that happened to a fake.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Set(Line, PinState),
    WaitNs(u32),
    WaitUs(u32),
    WaitMs(u32),
}

/// Shared event log.
///
/// Cloning a `Recorder` shares the underlying log.
#[derive(Clone)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}
impl Recorder {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a pin which records its writes as `line`.
    pub fn pin(&self, line: Line) -> FakePin {
        FakePin {
            line,
            recorder: self.clone(),
        }
    }

    /// Creates a delay which records its waits.
    pub fn delay(&self) -> FakeDelay {
        FakeDelay {
            recorder: self.clone(),
        }
    }

    /// Returns a copy of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct FakePin {
    line: Line,
    recorder: Recorder,
}
impl ErrorType for FakePin {
    type Error = Infallible;
}
impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Set(self.line, PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Set(self.line, PinState::High));
        Ok(())
    }
}

/// Pin whose every write fails.
pub struct FailingPin;
impl ErrorType for FailingPin {
    type Error = ErrorKind;
}
impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Delay that returns immediately, recording the requested time in the
/// unit it was requested in.
pub struct FakeDelay {
    recorder: Recorder,
}
impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.recorder.push(Event::WaitNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.recorder.push(Event::WaitUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(Event::WaitMs(ms));
    }
}
