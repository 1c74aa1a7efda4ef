//! weekplan library
//!
//! Model core of a Pomodoro-style weekly schedule display. Exposes
//! modules for integration testing and binary reuse.

pub mod domain;
pub mod infra;
pub mod io;
pub mod services;
