mod config;
mod direction;
mod driver;
mod error;
mod motion;

pub use config::Config;
pub use direction::direction_state;
pub use direction::DirectionSense;
pub use driver::Controller;
pub use error::Error;
pub use error::Line;
pub use motion::Move;
pub use motion::Speed;
