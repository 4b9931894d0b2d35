use arduino_hal::{
    default_serial, delay_ms, pins,
    port::{
        mode::{Input, Output, PullUp},
        Pin, D2, D4, D6, D8,
    },
    prelude::_unwrap_infallible_UnwrapInfallible,
    Delay, Peripherals, Pins,
};
use pulsedrive::{
    Action, Config, Controller, DirectionSense, Error, MilliSeconds,
    DEMO_SCRIPT,
};
use ufmt::uwriteln;

use crate::uno::{AnyOutput, UnoSerial};

/// Motor controller timing.
///
/// `min_alt_pulse` must match the minimum enable-blip time configured in
/// the motor controller for its alternate speed limit.
const CONFIG: Config = Config::new(
    MilliSeconds::new(2000),
    MilliSeconds::new(20000),
    MilliSeconds::new(10),
    DirectionSense::Normal,
);

/// Wiring:
///
/// | Line        | Pin |
/// |-------------|-----|
/// | enable+     | D2  |
/// | enable-     | D3  |
/// | direction+  | D4  |
/// | direction-  | D5  |
/// | pulse+      | D6  |
/// | pulse-      | D7  |
/// | feedback+   | D8  |
/// | feedback-   | D9  |
pub struct Machine {
    controller:
        Controller<Pin<Output, D2>, Pin<Output, D4>, Pin<Output, D6>, Delay>,
    /// Negative reference lines: enable-, direction-, pulse-, feedback-.
    references: [AnyOutput; 4],
    /// Status output from the motor controller. Not read yet.
    _feedback: Pin<Input<PullUp>, D8>,
    serial: UnoSerial,
}

impl Machine {
    const BAUD_RATE: u32 = 57600;

    pub fn new() -> Self {
        let peripherals: Peripherals = unsafe { Peripherals::steal() };
        let pins: Pins = pins!(peripherals);
        let mut serial = default_serial!(peripherals, pins, Self::BAUD_RATE);

        // Announce the machine!
        delay_ms(100);
        uwriteln!(&mut serial, "MOVEDEMO").unwrap_infallible();

        let controller = Controller::new(
            pins.d2.into_output(),
            pins.d4.into_output(),
            pins.d6.into_output(),
            Delay::new(),
            CONFIG,
        );
        let references = [
            pins.d3.into_output().downgrade(),
            pins.d5.into_output().downgrade(),
            pins.d7.into_output().downgrade(),
            pins.d9.into_output().downgrade(),
        ];
        let _feedback = pins.d8.into_pull_up_input();

        Self {
            controller,
            references,
            _feedback,
            serial,
        }
    }

    /// Run the power-up sequence, including the wait for homing.
    pub fn power_up(&mut self) {
        uwriteln!(
            &mut self.serial,
            "Info. Power-up. Homing wait: {} ms.",
            CONFIG.homing_wait().get_value()
        )
        .unwrap_infallible();
        match self.controller.power_up(&mut self.references) {
            Ok(()) => uwriteln!(&mut self.serial, "Ok.").unwrap_infallible(),
            Err(err) => self.print_error(err),
        }
    }

    /// Run one pass of the demonstration script.
    ///
    /// A failed action is reported and the script moves on.
    pub fn run_script(&mut self) {
        for &action in DEMO_SCRIPT {
            self.print_action(action);
            if let Err(err) = self.controller.perform(action) {
                self.print_error(err);
            }
        }
        uwriteln!(&mut self.serial, "Info. Script done.").unwrap_infallible();
    }

    fn print_action(&mut self, action: Action) {
        match action {
            Action::Move(m) => {
                uwriteln!(&mut self.serial, "Info. Move: {:?}", m)
                    .unwrap_infallible()
            }
            Action::Dwell => uwriteln!(
                &mut self.serial,
                "Info. Dwell: {} ms.",
                CONFIG.dwell().get_value()
            )
            .unwrap_infallible(),
        }
    }

    /// Print an error from the controller.
    fn print_error(&mut self, error: Error) {
        uwriteln!(
            &mut self.serial,
            "ERROR: Write to {:?} line failed.",
            error.line
        )
        .unwrap_infallible()
    }
}
