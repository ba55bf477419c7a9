//! Time source for entries that have no file on disk to take a timestamp from.
//!
//! Synthesized content (`write_file_from_bytes`) is stamped with `Clock::now()`.
//! `SystemClock` is the default; `FixedClock` makes the output reproducible.
use chrono::{DateTime, Utc};

/// Supplies the current time to the archive writer.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Builds a clock from seconds since the Unix epoch. `None` when out of range.
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::from_timestamp(1_234_567_890).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), 1_234_567_890);
    }

    #[test]
    fn test_fixed_clock_out_of_range() {
        assert!(FixedClock::from_timestamp(i64::MAX).is_none());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
