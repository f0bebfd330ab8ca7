use parking_lot::Mutex;
use tracing::trace;

use super::{Spi, SpiSettings};

/// Thread-safe wrapper around a borrowed SPI controller
///
/// Same contract as [`crate::bus::i2c::ThreadSafeI2c`]: calls are serialized
/// through one mutex, results pass through unchanged and the lock is always
/// released.
pub struct ThreadSafeSpi<'a, B: Spi + ?Sized> {
    bus: Mutex<&'a mut B>,
}

impl<'a, B: Spi + ?Sized> ThreadSafeSpi<'a, B> {
    pub fn new(bus: &'a mut B) -> Self {
        Self {
            bus: Mutex::new(bus),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.bus.is_locked()
    }
}

impl<B: Spi + ?Sized> Spi for &ThreadSafeSpi<'_, B> {
    type Error = B::Error;

    fn configure(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        let mut bus = self.bus.lock();
        trace!("[thread_safe_spi] configure {} Hz", settings.clock_rate_hz);
        bus.configure(settings)
    }

    fn transfer(
        &mut self,
        data_out: &[u8],
        data_in: &mut [u8],
        filler: u8,
    ) -> Result<(), Self::Error> {
        let mut bus = self.bus.lock();
        trace!(
            "[thread_safe_spi] transfer out={} in={}",
            data_out.len(),
            data_in.len()
        );
        bus.transfer(data_out, data_in, filler)
    }
}

impl<B: Spi + ?Sized> Spi for ThreadSafeSpi<'_, B> {
    type Error = B::Error;

    fn configure(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        (&*self).configure(settings)
    }

    fn transfer(
        &mut self,
        data_out: &[u8],
        data_in: &mut [u8],
        filler: u8,
    ) -> Result<(), Self::Error> {
        (&*self).transfer(data_out, data_in, filler)
    }
}
