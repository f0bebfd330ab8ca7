use std::convert::Infallible;
use std::time::Instant;

use super::{Counter, Uptime};

/// Nanosecond counter backed by the host's monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct MonotonicCounter {
    start: Instant,
}

impl MonotonicCounter {
    pub const FREQUENCY_HZ: u32 = 1_000_000_000;

    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter for MonotonicCounter {
    type Error = Infallible;

    fn uptime(&mut self) -> Result<Uptime, Self::Error> {
        let count = u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        Ok(Uptime {
            frequency_hz: Self::FREQUENCY_HZ,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::delay;
    use std::time::Duration;

    #[test]
    fn test_count_increases() {
        let mut counter = MonotonicCounter::new();
        let first = counter.uptime().unwrap();
        std::thread::sleep(Duration::from_millis(1));
        let second = counter.uptime().unwrap();
        assert!(second.count > first.count);
        assert_eq!(second.frequency_hz, MonotonicCounter::FREQUENCY_HZ);
    }

    #[test]
    fn test_delay_takes_at_least_duration() {
        let mut counter = MonotonicCounter::new();
        let started = Instant::now();
        delay(&mut counter, Duration::from_millis(2)).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2));
    }
}
