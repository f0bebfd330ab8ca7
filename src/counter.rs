//! Hardware counter interface and timing built on top of it
//!
//! A [`Counter`] is a free-running tick source with a known frequency.
//! [`CounterTimeout`] turns a duration into a tick deadline on that counter,
//! and [`delay`] spins until the deadline passes.

pub mod monotonic;

use std::time::Duration;

use crate::errors::CounterError;

pub use monotonic::MonotonicCounter;

/// Snapshot of a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    /// Tick frequency in Hz
    pub frequency_hz: u32,
    /// Ticks since the counter started
    pub count: u64,
}

/// Free-running hardware counter
pub trait Counter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current frequency and tick count
    fn uptime(&mut self) -> Result<Uptime, Self::Error>;
}

impl<T: Counter + ?Sized> Counter for &mut T {
    type Error = T::Error;

    fn uptime(&mut self) -> Result<Uptime, Self::Error> {
        (**self).uptime()
    }
}

/// Number of ticks `duration` spans at `frequency_hz`, rounded up
pub fn duration_to_cycles<E>(duration: Duration, frequency_hz: u32) -> Result<u64, CounterError<E>> {
    if frequency_hz == 0 {
        return Err(CounterError::InvalidFrequency);
    }
    let nanos = duration.as_nanos();
    let cycles = (nanos * u128::from(frequency_hz)).div_ceil(1_000_000_000);
    u64::try_from(cycles).map_err(|_| CounterError::OutOfRange {
        nanos,
        frequency_hz,
    })
}

/// Deadline on a counter
///
/// Holds only the target tick count, so any number of timeouts can be made
/// from one counter and polled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTimeout {
    deadline: u64,
}

impl CounterTimeout {
    pub fn create<C: Counter + ?Sized>(
        counter: &mut C,
        duration: Duration,
    ) -> Result<Self, CounterError<C::Error>> {
        let uptime = counter.uptime().map_err(CounterError::Counter)?;
        let cycles = duration_to_cycles(duration, uptime.frequency_hz)?;
        let deadline = uptime
            .count
            .checked_add(cycles)
            .ok_or(CounterError::OutOfRange {
                nanos: duration.as_nanos(),
                frequency_hz: uptime.frequency_hz,
            })?;
        Ok(Self { deadline })
    }

    /// Returns true once `counter` has reached the deadline
    ///
    /// `counter` must be the one the timeout was created from.
    pub fn poll<C: Counter + ?Sized>(&self, counter: &mut C) -> Result<bool, CounterError<C::Error>> {
        let uptime = counter.uptime().map_err(CounterError::Counter)?;
        Ok(uptime.count >= self.deadline)
    }

    /// Tick count at which this timeout expires
    pub fn deadline(&self) -> u64 {
        self.deadline
    }
}

pub fn create_timeout<C: Counter + ?Sized>(
    counter: &mut C,
    duration: Duration,
) -> Result<CounterTimeout, CounterError<C::Error>> {
    CounterTimeout::create(counter, duration)
}

/// Busy-wait on `counter` for `duration`
pub fn delay<C: Counter + ?Sized>(
    counter: &mut C,
    duration: Duration,
) -> Result<(), CounterError<C::Error>> {
    let timeout = create_timeout(counter, duration)?;
    while !timeout.poll(counter)? {
        std::hint::spin_loop();
    }
    Ok(())
}
