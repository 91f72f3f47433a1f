//! Clock abstraction for determinism.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Abstraction over wall time and waiting, so reaction times can be
/// measured deterministically in tests.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Blocks the caller for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Elapsed time between two instants, clamped to zero if the clock went
/// backwards.
#[must_use]
pub fn elapsed_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Duration {
    (end - start).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_elapsed_between_measures_forward_delta() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let end = start + chrono::Duration::milliseconds(1_250);

        assert_eq!(elapsed_between(start, end), Duration::from_millis(1_250));
    }

    #[test]
    fn test_elapsed_between_clamps_backwards_clock_to_zero() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 5).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

        assert_eq!(elapsed_between(start, end), Duration::ZERO);
    }
}
