//! Peripheral bus interfaces and the implementations shipped with this crate.

pub mod i2c;
pub mod spi;

/// Bus type enum for the communication interfaces described in `buses.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    I2c,
    Spi,
}

impl BusType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i2c" => Some(BusType::I2c),
            "spi" => Some(BusType::Spi),
            _ => None,
        }
    }
}
