use std::thread;
use std::time::Duration;

use navigate_hal::bus::i2c::{I2c, I2cSettings, ThreadSafeI2c};
use navigate_hal::sensors::nunchuk::{NunchukReport, ADDRESS};
use navigate_hal::sensors::Nunchuk;
use navigate_hal::I2cError;

// joystick centred, accel (512, 512, 716), no buttons pressed
const REPORT: [u8; 6] = [0x80, 0x80, 0x80, 0x80, 0xB3, 0b0000_0011];

/// Controller with a register pointer: a write sets it, a read streams from
/// it and leaves it past the last byte read.
struct RegisterDevice {
    registers: [u8; 256],
    pointer: u8,
}

impl RegisterDevice {
    fn new() -> Self {
        let mut registers = [0x00; 256];
        registers[..REPORT.len()].copy_from_slice(&REPORT);
        Self {
            registers,
            pointer: 0,
        }
    }
}

impl I2c for RegisterDevice {
    type Error = I2cError;

    fn configure(&mut self, _settings: &I2cSettings) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
    ) -> Result<(), Self::Error> {
        if address != ADDRESS {
            return Err(I2cError::NoAck { address });
        }
        if let Some(&register) = data_out.first() {
            self.pointer = register;
        }
        for byte in data_in.iter_mut() {
            *byte = self.registers[usize::from(self.pointer)];
            self.pointer = self.pointer.wrapping_add(1);
        }
        thread::sleep(Duration::from_micros(50));
        Ok(())
    }
}

#[test]
fn readers_holding_the_lock_always_get_whole_reports() {
    let expected = NunchukReport::from_bytes(&REPORT).unwrap();
    let mut device = RegisterDevice::new();
    let shared = ThreadSafeI2c::new(&mut device);

    let reports: Vec<NunchukReport> = thread::scope(|s| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let shared = &shared;
                s.spawn(move || {
                    (0..50)
                        .map(|_| {
                            let mut bus = shared.lock();
                            Nunchuk::new(&mut *bus).read_report().unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(reports.len(), 100);
    let corrupted = reports.iter().filter(|r| **r != expected).count();
    assert_eq!(corrupted, 0);
    assert!(!shared.is_locked());
}

#[test]
fn pointer_left_mid_report_corrupts_the_next_read() {
    let mut device = RegisterDevice::new();

    // another caller's read lands between our pointer write and read
    device.transaction(ADDRESS, &[0x00], &mut []).unwrap();
    device.transaction(ADDRESS, &[], &mut [0u8; 3]).unwrap();
    let mut bytes = [0u8; 6];
    device.transaction(ADDRESS, &[], &mut bytes).unwrap();

    assert_ne!(bytes, REPORT);
}
