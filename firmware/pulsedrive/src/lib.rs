#![cfg_attr(not(test), no_std)]

mod controller;
mod distance;
mod microseconds;
mod milliseconds;
mod script;

pub use controller::direction_state;
pub use controller::Config;
pub use controller::Controller;
pub use controller::DirectionSense;
pub use controller::Error;
pub use controller::Line;
pub use controller::Move;
pub use controller::Speed;
pub use distance::Distance;
pub use microseconds::MicroSeconds;
pub use milliseconds::MilliSeconds;
pub use script::Action;
pub use script::DEMO_SCRIPT;

#[cfg(test)]
mod testing;
