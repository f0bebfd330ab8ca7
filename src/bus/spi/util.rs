//! Half-duplex helpers over a full-duplex [`Spi`] transfer
//!
//! Most SPI peripherals only talk in one direction at a time: the controller
//! writes a command while ignoring the read line, then clocks filler bytes
//! out while the peripheral answers.

use super::{Spi, DEFAULT_FILLER};

/// Write `data_out` and ignore whatever the peripheral sends back
pub fn write<S: Spi + ?Sized>(spi: &mut S, data_out: &[u8]) -> Result<(), S::Error> {
    spi.transfer(data_out, &mut [], DEFAULT_FILLER)
}

/// Read into `data_in` while sending `filler` on the outbound line
pub fn read<S: Spi + ?Sized>(spi: &mut S, data_in: &mut [u8], filler: u8) -> Result<(), S::Error> {
    spi.transfer(&[], data_in, filler)
}

/// Read `N` bytes while sending `filler`
pub fn read_array<const N: usize, S: Spi + ?Sized>(
    spi: &mut S,
    filler: u8,
) -> Result<[u8; N], S::Error> {
    let mut buffer = [0u8; N];
    read(spi, &mut buffer, filler)?;
    Ok(buffer)
}

/// Write `data_out`, then read into `data_in` with `filler` on the outbound line
///
/// Two transfers are issued; if the write fails the read is skipped.
pub fn write_then_read<S: Spi + ?Sized>(
    spi: &mut S,
    data_out: &[u8],
    data_in: &mut [u8],
    filler: u8,
) -> Result<(), S::Error> {
    write(spi, data_out)?;
    read(spi, data_in, filler)
}

/// Write `data_out`, then read `N` bytes back
pub fn write_then_read_array<const N: usize, S: Spi + ?Sized>(
    spi: &mut S,
    data_out: &[u8],
    filler: u8,
) -> Result<[u8; N], S::Error> {
    write(spi, data_out)?;
    read_array(spi, filler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::spi::MockSpi;
    use crate::errors::SpiError;

    #[test]
    fn test_write_then_read_issues_two_transfers() {
        let mut mock = MockSpi::new();
        mock.queue_response(vec![0x12, 0x34]);

        let mut buf = [0u8; 2];
        write_then_read(&mut mock, &[0x9F], &mut buf, 0x00).unwrap();

        assert_eq!(buf, [0x12, 0x34]);
        let transfers = mock.transfers();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].data_out, vec![0x9F]);
        assert_eq!(transfers[0].data_in_len, 0);
        assert_eq!(transfers[1].data_out, Vec::<u8>::new());
        assert_eq!(transfers[1].data_in_len, 2);
        assert_eq!(transfers[1].filler, 0x00);
    }

    #[test]
    fn test_write_uses_default_filler() {
        let mut mock = MockSpi::new();
        write(&mut mock, &[0x06]).unwrap();
        assert_eq!(mock.transfers()[0].filler, DEFAULT_FILLER);
    }

    #[test]
    fn test_failed_write_skips_read() {
        let mut mock = MockSpi::new();
        mock.fail_next_transfer(SpiError::ModeFault);
        mock.queue_response(vec![0xAA]);

        let result = write_then_read_array::<1, _>(&mut mock, &[0x03], DEFAULT_FILLER);

        assert!(matches!(result, Err(SpiError::ModeFault)));
        assert_eq!(mock.transfers().len(), 1);
        assert_eq!(mock.pending_responses(), 1);
    }
}
