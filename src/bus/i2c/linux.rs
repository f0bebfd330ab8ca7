#[cfg(target_os = "linux")]
use i2cdev::core::{I2CMessage, I2CTransfer};
#[cfg(target_os = "linux")]
use i2cdev::linux::{LinuxI2CBus, LinuxI2CMessage};
#[cfg(target_os = "linux")]
use tracing::{debug, info};

#[cfg(target_os = "linux")]
use super::{check_address, check_fixed_clock};
use super::{I2c, I2cSettings};
use crate::errors::{I2cError, I2cResult};

/// I2C controller backed by a Linux `/dev/i2c-N` character device
///
/// The bus clock of a Linux adapter is fixed by the kernel (device tree or
/// module parameters), so `configure` only accepts the rate the bus was
/// opened with.
#[cfg(target_os = "linux")]
pub struct LinuxI2c {
    bus: LinuxI2CBus,
    path: String,
    settings: I2cSettings,
}

#[cfg(not(target_os = "linux"))]
pub struct LinuxI2c {
    _phantom: std::marker::PhantomData<()>,
}

#[cfg(target_os = "linux")]
impl LinuxI2c {
    pub fn open(path: &str, settings: I2cSettings) -> I2cResult<Self> {
        let bus = LinuxI2CBus::new(path)?;
        info!(
            "[linux_i2c] opened {} at {} Hz",
            path, settings.clock_rate_hz
        );
        Ok(Self {
            bus,
            path: path.to_string(),
            settings,
        })
    }

    /// Device path, useful for logging
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(not(target_os = "linux"))]
impl LinuxI2c {
    pub fn open(_path: &str, _settings: I2cSettings) -> I2cResult<Self> {
        Err(I2cError::Unsupported(
            "Linux I2C devices are only available on Linux".to_string(),
        ))
    }

    pub fn path(&self) -> &str {
        ""
    }
}

#[cfg(target_os = "linux")]
impl I2c for LinuxI2c {
    type Error = I2cError;

    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error> {
        check_fixed_clock(&self.settings, settings)?;
        debug!("[linux_i2c] {} configured", self.path);
        Ok(())
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        check_address(address)?;
        let target = u16::from(address);

        let mut messages = Vec::with_capacity(2);
        if !data_out.is_empty() || data_in.is_empty() {
            messages.push(LinuxI2CMessage::write(data_out).with_address(target));
        }
        if !data_in.is_empty() {
            messages.push(LinuxI2CMessage::read(data_in).with_address(target));
        }

        self.bus.transfer(&mut messages[..])?;
        Ok(())
    }
}

#[cfg(not(target_os = "linux"))]
impl I2c for LinuxI2c {
    type Error = I2cError;

    fn configure(&mut self, _settings: &I2cSettings) -> Result<(), Self::Error> {
        Err(I2cError::Unsupported(
            "Linux I2C devices are only available on Linux".to_string(),
        ))
    }

    fn transaction(
        &mut self,
        _address: u8,
        _data_out: &[u8],
        _data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        Err(I2cError::Unsupported(
            "Linux I2C devices are only available on Linux".to_string(),
        ))
    }
}
