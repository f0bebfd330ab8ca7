//! Adapter from `embedded-hal` 1.0 I2C controllers
//!
//! Lets any chip HAL that implements [`embedded_hal::i2c::I2c`] stand in
//! wherever this crate expects an [`I2c`].

use embedded_hal::i2c::{Error as _, ErrorKind, I2c as EhI2c};

use super::{check_fixed_clock, I2c, I2cSettings};
use crate::errors::I2cError;

/// Wraps an `embedded-hal` controller whose clock was set at construction
pub struct EmbeddedHalI2c<T> {
    inner: T,
    settings: I2cSettings,
}

impl<T: EhI2c> EmbeddedHalI2c<T> {
    /// `settings` must describe the clock the controller was initialised with
    pub fn new(inner: T, settings: I2cSettings) -> Self {
        Self { inner, settings }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

fn map_error(address: u8, kind: ErrorKind) -> I2cError {
    match kind {
        ErrorKind::NoAcknowledge(_) => I2cError::NoAck { address },
        ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
        ErrorKind::Bus => I2cError::Bus,
        ErrorKind::Overrun => I2cError::Overrun,
        other => I2cError::Other(format!("{:?}", other)),
    }
}

impl<T: EhI2c> I2c for EmbeddedHalI2c<T> {
    type Error = I2cError;

    fn configure(&mut self, settings: &I2cSettings) -> Result<(), Self::Error> {
        check_fixed_clock(&self.settings, settings)
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        let result = match (data_out.is_empty(), data_in.is_empty()) {
            (_, true) => self.inner.write(address, data_out),
            (true, false) => self.inner.read(address, data_in),
            (false, false) => self.inner.write_read(address, data_out, data_in),
        };
        result.map_err(|e| map_error(address, e.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Minimal `embedded-hal` controller: echoes written bytes, fails on demand
    #[derive(Default)]
    struct FakeController {
        last_address: Option<u8>,
        last_write: Vec<u8>,
        fail_with: Option<ErrorKind>,
    }

    impl ErrorType for FakeController {
        type Error = FakeError;
    }

    impl EhI2c for FakeController {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(kind) = self.fail_with.take() {
                return Err(FakeError(kind));
            }
            self.last_address = Some(address);
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.last_write = bytes.to_vec(),
                    Operation::Read(buf) => {
                        for (i, b) in buf.iter_mut().enumerate() {
                            *b = self.last_write.get(i).copied().unwrap_or(0) ^ 0xFF;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_read_uses_repeated_start() {
        let mut bus = EmbeddedHalI2c::new(FakeController::default(), I2cSettings::STANDARD);
        let mut buf = [0u8; 2];
        bus.transaction(0x40, &[0x0F, 0xF0], &mut buf).unwrap();

        assert_eq!(buf, [0xF0, 0x0F]);
        let inner = bus.into_inner();
        assert_eq!(inner.last_address, Some(0x40));
        assert_eq!(inner.last_write, vec![0x0F, 0xF0]);
    }

    #[test]
    fn test_error_kinds_are_mapped() {
        let mut bus = EmbeddedHalI2c::new(FakeController::default(), I2cSettings::STANDARD);

        bus.inner.fail_with = Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        assert!(matches!(
            bus.transaction(0x55, &[0x00], &mut []),
            Err(I2cError::NoAck { address: 0x55 })
        ));

        bus.inner.fail_with = Some(ErrorKind::ArbitrationLoss);
        assert!(matches!(
            bus.transaction(0x55, &[0x00], &mut []),
            Err(I2cError::ArbitrationLost)
        ));
    }

    #[test]
    fn test_configure_rejects_clock_change() {
        let mut bus = EmbeddedHalI2c::new(FakeController::default(), I2cSettings::FAST);
        assert!(bus.configure(&I2cSettings::FAST).is_ok());
        assert!(bus.configure(&I2cSettings::STANDARD).is_err());
    }
}
