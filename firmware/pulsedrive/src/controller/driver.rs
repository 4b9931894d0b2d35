use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::{
    direction_state, Action, Config, Error, Line, MicroSeconds, MilliSeconds,
    Move, Speed,
};

/// Motor controller driven by enable, direction and pulse lines.
///
/// The controller is open-loop: it writes line levels and waits, and never
/// reads anything back from the motor controller.
///
/// # Type Parameters
///
/// - `EN`: enable pin
/// - `DIR`: direction pin
/// - `PUL`: pulse pin
/// - `D`: delay provider
pub struct Controller<EN, DIR, PUL, D> {
    /// Pin to use for enabling the motor controller.
    pin_enable: EN,
    /// Pin to use for direction indication.
    pin_direction: DIR,
    /// Pin to use for pulses.
    pin_pulse: PUL,
    /// Blocking delay provider.
    delay: D,
    config: Config,
}

impl<EN, DIR, PUL, D> Controller<EN, DIR, PUL, D>
where
    EN: OutputPin,
    DIR: OutputPin,
    PUL: OutputPin,
    D: DelayNs,
{
    /// Creates a new `Controller`.
    ///
    /// This does not touch any of the lines. Call [Controller::power_up]
    /// before issuing moves.
    ///
    /// # Parameters
    ///
    /// - `pin_enable`: Pin to use for enable signals.
    /// - `pin_direction`: Pin to use for direction signals.
    /// - `pin_pulse`: Pin to use for pulse signals.
    /// - `delay`: Delay provider for all waits.
    /// - `config`: Timing and direction configuration.
    pub fn new(
        pin_enable: EN,
        pin_direction: DIR,
        pin_pulse: PUL,
        delay: D,
        config: Config,
    ) -> Self {
        Self {
            pin_enable,
            pin_direction,
            pin_pulse,
            delay,
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Powers up the motor controller.
    ///
    /// The sequence is:
    ///
    /// 1. Disable, then wait one dwell period.
    /// 2. Ground every negative reference line.
    /// 3. Set the direction and pulse lines low.
    /// 4. Enable. Controllers configured to home on enable start homing here.
    /// 5. Wait for the homing period, then one more dwell period.
    ///
    /// # Parameters
    ///
    /// - `references`: Negative reference lines to ground.
    pub fn power_up<R: OutputPin>(
        &mut self,
        references: &mut [R],
    ) -> Result<(), Error> {
        self.pin_enable
            .set_low()
            .map_err(|e| Error::new(Line::Enable, e))?;
        self.wait_ms(self.config.dwell());

        for (index, reference) in references.iter_mut().enumerate() {
            reference
                .set_low()
                .map_err(|e| Error::new(Line::Reference(index), e))?;
        }

        self.pin_direction
            .set_low()
            .map_err(|e| Error::new(Line::Direction, e))?;
        self.pin_pulse.set_low().map_err(|e| Error::new(Line::Pulse, e))?;

        self.pin_enable
            .set_high()
            .map_err(|e| Error::new(Line::Enable, e))?;
        self.wait_ms(self.config.homing_wait());
        self.wait_ms(self.config.dwell());

        Ok(())
    }

    /// Executes a move.
    ///
    /// For [Speed::Alternate] the enable line is first blipped low and back
    /// high, each level held for [Config::alt_speed_hold]. For
    /// [Speed::Normal] the enable line is left alone.
    ///
    /// The direction line is then written once (even for a zero distance)
    /// and held while exactly `|distance|` pulses are sent.
    ///
    /// # Parameters
    ///
    /// - `command`: The move to execute.
    pub fn execute(&mut self, command: Move) -> Result<(), Error> {
        if command.speed == Speed::Alternate {
            self.request_alternate_speed()?;
        }

        let state = direction_state(command.distance, self.config.sense());
        self.pin_direction
            .set_state(state)
            .map_err(|e| Error::new(Line::Direction, e))?;

        for _ in 0..command.distance.pulses() {
            self.pulse()?;
        }

        Ok(())
    }

    /// Waits for one dwell period.
    pub fn dwell(&mut self) {
        self.wait_ms(self.config.dwell());
    }

    /// Performs one scripted action.
    pub fn perform(&mut self, action: Action) -> Result<(), Error> {
        match action {
            Action::Move(command) => self.execute(command),
            Action::Dwell => {
                self.dwell();
                Ok(())
            }
        }
    }

    /// Blips the enable line to request the alternate speed on the next move.
    fn request_alternate_speed(&mut self) -> Result<(), Error> {
        let hold = self.config.alt_speed_hold();
        self.pin_enable
            .set_low()
            .map_err(|e| Error::new(Line::Enable, e))?;
        self.wait_ms(hold);
        self.pin_enable
            .set_high()
            .map_err(|e| Error::new(Line::Enable, e))?;
        self.wait_ms(hold);
        Ok(())
    }

    /// Sends a single pulse.
    fn pulse(&mut self) -> Result<(), Error> {
        let hold = self.config.pulse_hold();
        self.set_pulse(PinState::High)?;
        self.hold_pulse(hold);
        self.set_pulse(PinState::Low)?;
        self.hold_pulse(hold);
        Ok(())
    }

    fn set_pulse(&mut self, state: PinState) -> Result<(), Error> {
        self.pin_pulse
            .set_state(state)
            .map_err(|e| Error::new(Line::Pulse, e))
    }

    /// Holds the current pulse level; no-op for a zero hold.
    fn hold_pulse(&mut self, hold: MicroSeconds) {
        if !hold.is_zero() {
            self.delay.delay_us(hold.get_value());
        }
    }

    fn wait_ms(&mut self, time: MilliSeconds) {
        self.delay.delay_ms(time.get_value());
    }
}
