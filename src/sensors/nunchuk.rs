use tracing::{debug, warn};

use super::accelerometer::{Accelerometer, Axis, Microgravity, Sample, ONE_G};
use crate::bus::i2c::{util, I2c};
use crate::errors::DeviceError;
use crate::percent::Percent;

/// Fixed bus address of the Nunchuk
pub const ADDRESS: u8 = 0x52;

// Unencrypted initialisation sequence
const INIT_SEQUENCE: [[u8; 2]; 2] = [[0xF0, 0x55], [0xFB, 0x00]];
const REPORT_REGISTER: u8 = 0x00;
const REPORT_LEN: usize = 6;

// 10-bit accelerometer, centred at rest
const ACCEL_CENTER: i64 = 512;
const FULL_SCALE: Microgravity = 2 * ONE_G;

/// Decoded controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NunchukReport {
    pub joystick_x: u8,
    pub joystick_y: u8,
    /// Raw 10-bit accelerometer values
    pub accel: [u16; 3],
    pub c_button: bool,
    pub z_button: bool,
}

impl NunchukReport {
    /// Decode a raw report; `None` if the bus read back all ones, which is
    /// what an unplugged controller looks like
    pub fn from_bytes(bytes: &[u8; REPORT_LEN]) -> Option<Self> {
        if bytes.iter().all(|&b| b == 0xFF) {
            return None;
        }

        let low = bytes[5];
        let accel = [
            (u16::from(bytes[2]) << 2) | u16::from((low >> 2) & 0b11),
            (u16::from(bytes[3]) << 2) | u16::from((low >> 4) & 0b11),
            (u16::from(bytes[4]) << 2) | u16::from((low >> 6) & 0b11),
        ];

        Some(Self {
            joystick_x: bytes[0],
            joystick_y: bytes[1],
            accel,
            // buttons are active low
            z_button: low & 0b01 == 0,
            c_button: low & 0b10 == 0,
        })
    }

    pub fn to_sample(&self) -> Sample {
        let axis = |raw: u16| Percent::from_ratio(i64::from(raw) - ACCEL_CENTER, ACCEL_CENTER);
        Sample {
            full_scale: FULL_SCALE,
            axis: Axis {
                x: axis(self.accel[0]),
                y: axis(self.accel[1]),
                z: axis(self.accel[2]),
            },
        }
    }
}

/// Wii Nunchuk driver
///
/// Generic over the bus. A report is a pointer write followed by a separate
/// read, and the controller streams from wherever its pointer was left, so
/// the two must not be split by another caller. On a
/// [`ThreadSafeI2c`](crate::bus::i2c::ThreadSafeI2c) shared with other
/// threads, build the driver over [`ThreadSafeI2c::lock`](crate::bus::i2c::ThreadSafeI2c::lock)
/// for each report.
pub struct Nunchuk<I: I2c> {
    i2c: I,
}

impl<I: I2c> Nunchuk<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Disable report encryption so reports can be decoded directly
    pub fn init(&mut self) -> Result<(), DeviceError<I::Error>> {
        for step in INIT_SEQUENCE.iter() {
            util::write(&mut self.i2c, ADDRESS, step).map_err(DeviceError::Bus)?;
        }
        debug!("[nunchuk] initialised at {:#04x}", ADDRESS);
        Ok(())
    }

    /// Request and decode one report
    ///
    /// The register pointer is reset with a write before every read, as a
    /// separate transaction; the device does not support a repeated start.
    /// The caller needs exclusive use of the bus across both.
    pub fn read_report(&mut self) -> Result<NunchukReport, DeviceError<I::Error>> {
        util::write(&mut self.i2c, ADDRESS, &[REPORT_REGISTER]).map_err(DeviceError::Bus)?;
        let bytes: [u8; REPORT_LEN] =
            util::read_array(&mut self.i2c, ADDRESS).map_err(DeviceError::Bus)?;

        NunchukReport::from_bytes(&bytes).ok_or_else(|| {
            warn!("[nunchuk] no data, is the controller plugged in?");
            DeviceError::Disconnected {
                device: "nunchuk",
                byte: 0xFF,
            }
        })
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Accelerometer for Nunchuk<I> {
    type Error = DeviceError<I::Error>;

    fn read(&mut self) -> Result<Sample, Self::Error> {
        Ok(self.read_report()?.to_sample())
    }
}
