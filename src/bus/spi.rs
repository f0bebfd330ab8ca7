//! SPI bus abstractions
//!
//! Mirrors the I2C side: an [`Spi`] contract, helpers for half-duplex
//! exchanges, a [`MockSpi`] and a [`ThreadSafeSpi`] decorator.

pub mod mock;
pub mod thread_safe;
pub mod util;

use serde::{Deserialize, Serialize};

pub use mock::MockSpi;
pub use thread_safe::ThreadSafeSpi;

/// Byte placed on the outbound line when there is nothing to write
pub const DEFAULT_FILLER: u8 = 0xFF;

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    #[default]
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    #[default]
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// Generic settings for SPI controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiSettings {
    /// Serial clock frequency in Hz
    pub clock_rate_hz: u32,
    #[serde(default)]
    pub polarity: Polarity,
    #[serde(default)]
    pub phase: Phase,
}

impl Default for SpiSettings {
    fn default() -> Self {
        Self {
            clock_rate_hz: 1_000_000, // 1 MHz
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        }
    }
}

/// SPI controller
pub trait Spi {
    /// Error type reported by this controller
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply new settings to the controller
    fn configure(&mut self, settings: &SpiSettings) -> Result<(), Self::Error>;

    /// Full-duplex transfer
    ///
    /// Clocks out `max(data_out.len(), data_in.len())` bytes. Once `data_out`
    /// runs out, `filler` is sent in its place; bytes received beyond the end
    /// of `data_in` are discarded.
    fn transfer(&mut self, data_out: &[u8], data_in: &mut [u8], filler: u8)
        -> Result<(), Self::Error>;
}

impl<T: Spi + ?Sized> Spi for &mut T {
    type Error = T::Error;

    fn configure(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        (**self).configure(settings)
    }

    fn transfer(
        &mut self,
        data_out: &[u8],
        data_in: &mut [u8],
        filler: u8,
    ) -> Result<(), Self::Error> {
        (**self).transfer(data_out, data_in, filler)
    }
}
