//! Navigate HAL
//!
//! Peripheral interfaces for Navigate sensor hardware. Device drivers are
//! written against the traits in [`bus`], [`sensors`] and [`counter`]; the
//! concrete implementation underneath can be a Linux device, an
//! `embedded-hal` chip driver, a mock, or a thread-safe decorator around any
//! of those.
//!
//! ```text
//!   Nunchuk driver        other drivers
//!         │                    │
//!         └──────┬─────────────┘
//!                ▼
//!        ThreadSafeI2c (one lock)
//!                │
//!                ▼
//!   LinuxI2c / EmbeddedHalI2c / MockI2c
//! ```

// Public modules
pub mod bit_limits;
pub mod bus;
pub mod config;
pub mod counter;
pub mod errors;
pub mod overflow_counter;
pub mod percent;
pub mod sensors;

// Re-export commonly used types
pub use bus::i2c::{I2c, I2cSettings, ThreadSafeI2c};
pub use bus::spi::{Spi, SpiSettings, ThreadSafeSpi};
pub use config::{load_bus_config, BusConfig};
pub use errors::{ConfigError, DeviceError, I2cError, SpiError};
pub use sensors::accelerometer::{Accelerometer, Sample};

use tracing_subscriber::EnvFilter;

/// Initialize tracing with default configuration
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}
