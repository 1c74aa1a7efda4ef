//! Injectable wall-clock source
//!
//! Every time read in the system goes through the `Clock` trait so the
//! store and its queries stay testable with fixed instants.

use chrono::{DateTime, Local};

/// Wall-clock collaborator. Sampled synchronously at every query; no
/// caching or batching of time reads.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant, for tests and simulation.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let instant = Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }
}
