//! I2C bus abstractions
//!
//! [`I2c`] is the contract every I2C controller driver implements. Device
//! drivers are written against it and never see which implementation sits
//! underneath: a Linux `/dev/i2c-N` bus, an `embedded-hal` controller, a
//! [`ThreadSafeI2c`] decorator or a [`MockI2c`] in tests.

pub mod embedded;
pub mod linux;
pub mod mock;
pub mod thread_safe;
pub mod util;

use serde::{Deserialize, Serialize};

use crate::errors::{I2cError, I2cResult};

pub use embedded::EmbeddedHalI2c;
pub use linux::LinuxI2c;
pub use mock::MockI2c;
pub use thread_safe::ThreadSafeI2c;

/// Generic settings for I2C controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct I2cSettings {
    /// Serial clock rate in Hz
    pub clock_rate_hz: u32,
}

impl Default for I2cSettings {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cSettings {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { clock_rate_hz: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { clock_rate_hz: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        clock_rate_hz: 1_000_000,
    };
}

/// I2C controller
pub trait I2c {
    /// Error type reported by this controller
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply new settings to the controller
    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error>;

    /// Perform a single addressed exchange on the bus
    ///
    /// `data_out` is written to the target first. If `data_in` is not empty
    /// the controller then issues a repeated start and fills it with bytes
    /// read back from the same target. Either buffer may be empty.
    ///
    /// # Arguments
    /// * `address` - 7-bit target address
    /// * `data_out` - bytes to write
    /// * `data_in` - buffer to read into
    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2c + ?Sized> I2c for &mut T {
    type Error = T::Error;

    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error> {
        (**self).configure(settings)
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).transaction(address, data_out, data_in)
    }
}

/// Highest valid 7-bit target address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Reject addresses that do not fit in 7 bits
pub fn check_address(address: u8) -> I2cResult<()> {
    if address > MAX_ADDRESS {
        return Err(I2cError::AddressOutOfRange(address));
    }
    Ok(())
}

/// Accept `requested` only if it matches the clock rate the controller runs at
pub fn check_fixed_clock(fixed: &I2cSettings, requested: &I2cSettings) -> I2cResult<()> {
    if fixed.clock_rate_hz != requested.clock_rate_hz {
        return Err(I2cError::Unsupported(format!(
            "bus clock is fixed at {} Hz, cannot switch to {} Hz",
            fixed.clock_rate_hz, requested.clock_rate_hz
        )));
    }
    Ok(())
}
