//! Shorthands for common I2C transaction shapes
//!
//! Each helper issues exactly one [`I2c::transaction`], passing an empty
//! buffer for the direction it does not use.

use super::I2c;

/// Write `data_out` to the target device
pub fn write<I: I2c + ?Sized>(i2c: &mut I, address: u8, data_out: &[u8]) -> Result<(), I::Error> {
    i2c.transaction(address, data_out, &mut [])
}

/// Read bytes from the target device into `data_in`
pub fn read<I: I2c + ?Sized>(i2c: &mut I, address: u8, data_in: &mut [u8]) -> Result<(), I::Error> {
    i2c.transaction(address, &[], data_in)
}

/// Read `N` bytes from the target device and return them as an array
pub fn read_array<const N: usize, I: I2c + ?Sized>(
    i2c: &mut I,
    address: u8,
) -> Result<[u8; N], I::Error> {
    let mut buffer = [0u8; N];
    read(i2c, address, &mut buffer)?;
    Ok(buffer)
}

/// Write `data_out`, then read back into `data_in` after a repeated start
///
/// Same as calling `transaction` directly; kept for symmetry with the SPI
/// helpers.
pub fn write_then_read<I: I2c + ?Sized>(
    i2c: &mut I,
    address: u8,
    data_out: &[u8],
    data_in: &mut [u8],
) -> Result<(), I::Error> {
    i2c.transaction(address, data_out, data_in)
}

/// Write `data_out`, then read `N` bytes back and return them as an array
pub fn write_then_read_array<const N: usize, I: I2c + ?Sized>(
    i2c: &mut I,
    address: u8,
    data_out: &[u8],
) -> Result<[u8; N], I::Error> {
    let mut buffer = [0u8; N];
    write_then_read(i2c, address, data_out, &mut buffer)?;
    Ok(buffer)
}
