//! Serializing decorator for shared I2C buses
//!
//! A single I2C controller is often shared by several device drivers running
//! on different threads. [`ThreadSafeI2c`] borrows the controller and
//! serializes every `configure` and `transaction` call through one mutex, so
//! two callers can never interleave bytes on the wire. It implements [`I2c`]
//! itself (and for `&ThreadSafeI2c`), so drivers cannot tell it apart from
//! the controller it wraps.
//!
//! Each call is atomic on its own. A device that needs several calls in a
//! row, such as a pointer write followed by a plain read, takes
//! [`ThreadSafeI2c::lock`] and issues them through the guard.
//!
//! ```no_run
//! use navigate_hal::bus::i2c::{util, LinuxI2c, ThreadSafeI2c, I2cSettings};
//!
//! let mut bus = LinuxI2c::open("/dev/i2c-1", I2cSettings::STANDARD)?;
//! let shared = ThreadSafeI2c::new(&mut bus);
//!
//! std::thread::scope(|s| {
//!     s.spawn(|| util::write(&mut &shared, 0x52, &[0x00]));
//!     s.spawn(|| util::write(&mut &shared, 0x68, &[0x6B, 0x00]));
//! });
//! # Ok::<(), navigate_hal::I2cError>(())
//! ```

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::trace;

use super::{I2c, I2cSettings};

/// Thread-safe wrapper around a borrowed I2C controller
///
/// The wrapped controller is not owned; it must outlive the decorator.
/// Errors from the controller are returned unchanged, and the lock is
/// released on every exit path, including a panicking controller.
pub struct ThreadSafeI2c<'a, B: I2c + ?Sized> {
    bus: Mutex<&'a mut B>,
}

impl<'a, B: I2c + ?Sized> ThreadSafeI2c<'a, B> {
    pub fn new(bus: &'a mut B) -> Self {
        Self {
            bus: Mutex::new(bus),
        }
    }

    /// Returns true if another caller currently holds the bus
    pub fn is_locked(&self) -> bool {
        self.bus.is_locked()
    }

    /// Hold the bus for a sequence of calls
    ///
    /// Other callers block until the guard is dropped.
    pub fn lock(&self) -> MappedMutexGuard<'_, B> {
        trace!("[thread_safe_i2c] exclusive access");
        MutexGuard::map(self.bus.lock(), |bus| &mut **bus)
    }
}

impl<B: I2c + ?Sized> I2c for &ThreadSafeI2c<'_, B> {
    type Error = B::Error;

    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error> {
        let mut bus = self.bus.lock();
        trace!("[thread_safe_i2c] configure {} Hz", settings.clock_rate_hz);
        bus.configure(settings)
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut bus = self.bus.lock();
        trace!(
            "[thread_safe_i2c] transaction {:#04x} out={} in={}",
            address,
            data_out.len(),
            data_in.len()
        );
        bus.transaction(address, data_out, data_in)
    }
}

impl<B: I2c + ?Sized> I2c for ThreadSafeI2c<'_, B> {
    type Error = B::Error;

    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error> {
        (&*self).configure(settings)
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        (&*self).transaction(address, data_out, data_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::i2c::MockI2c;
    use crate::errors::I2cError;

    #[test]
    fn test_forwards_transaction_unchanged() {
        let mut mock = MockI2c::new();
        mock.queue_response(vec![0xAB, 0xCD]);

        let mut buf = [0u8; 2];
        {
            let mut shared = ThreadSafeI2c::new(&mut mock);
            shared.transaction(0x1D, &[0x0F, 0x10], &mut buf).unwrap();
        }

        assert_eq!(buf, [0xAB, 0xCD]);
        let recorded = &mock.transactions()[0];
        assert_eq!(recorded.address, 0x1D);
        assert_eq!(recorded.data_out, vec![0x0F, 0x10]);
        assert_eq!(recorded.data_in_len, 2);
    }

    #[test]
    fn test_forwards_settings_unchanged() {
        let mut mock = MockI2c::new();
        let settings = I2cSettings { clock_rate_hz: 123_456 };
        {
            let shared = ThreadSafeI2c::new(&mut mock);
            (&shared).configure(&settings).unwrap();
        }
        assert_eq!(mock.settings(), Some(settings));
    }

    #[test]
    fn test_configure_failure_passes_through_and_releases_lock() {
        let mut mock = MockI2c::new();
        mock.fail_next_configure(I2cError::Unsupported("clock stretching".to_string()));

        let shared = ThreadSafeI2c::new(&mut mock);
        let result = (&shared).configure(&I2cSettings::FAST);

        assert!(matches!(result, Err(I2cError::Unsupported(ref msg)) if msg == "clock stretching"));
        assert!(!shared.is_locked());
        assert!((&shared).configure(&I2cSettings::FAST).is_ok());
    }

    #[test]
    fn test_transaction_failure_passes_through_and_releases_lock() {
        let mut mock = MockI2c::new();
        mock.fail_next_transaction(I2cError::NoAck { address: 0x50 });

        let shared = ThreadSafeI2c::new(&mut mock);
        let result = (&shared).transaction(0x50, &[0x00], &mut []);

        assert!(matches!(result, Err(I2cError::NoAck { address: 0x50 })));
        assert!(!shared.is_locked());
        assert!((&shared).transaction(0x50, &[0x00], &mut []).is_ok());
    }

    #[test]
    fn test_lock_holds_bus_until_guard_dropped() {
        let mut mock = MockI2c::new();
        mock.queue_response(vec![0x42]);
        {
            let shared = ThreadSafeI2c::new(&mut mock);
            {
                let mut bus = shared.lock();
                assert!(shared.is_locked());
                bus.transaction(0x52, &[0x00], &mut []).unwrap();
                let mut reply = [0u8; 1];
                bus.transaction(0x52, &[], &mut reply).unwrap();
                assert_eq!(reply, [0x42]);
            }
            assert!(!shared.is_locked());
        }
        assert_eq!(mock.transactions().len(), 2);
    }

    #[test]
    fn test_wraps_trait_object() {
        let mut mock = MockI2c::new();
        let bus: &mut dyn I2c<Error = I2cError> = &mut mock;
        let shared = ThreadSafeI2c::new(bus);
        (&shared).transaction(0x29, &[0xC0], &mut []).unwrap();
        drop(shared);
        assert_eq!(mock.transactions()[0].address, 0x29);
    }
}
