//! Infrastructure - configuration and wall-clock access

pub mod clock;
pub mod config;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
