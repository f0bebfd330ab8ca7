use thiserror::Error;

#[cfg(target_os = "linux")]
use i2cdev::linux::LinuxI2CError;

/// Errors reported by I2C bus implementations
#[derive(Error, Debug)]
pub enum I2cError {
    #[error("No acknowledgment from device at address {address:#04x}")]
    NoAck { address: u8 },

    #[error("Bus arbitration lost")]
    ArbitrationLost,

    #[error("Bus error")]
    Bus,

    #[error("Data overrun")]
    Overrun,

    #[error("Address {0:#04x} is not a valid 7-bit address")]
    AddressOutOfRange(u8),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Expected a {expected} byte response, got {actual}")]
    ResponseLength { expected: usize, actual: usize },

    #[error("No response queued for read of {len} byte(s) from {address:#04x}")]
    NoResponse { address: u8, len: usize },

    #[error("I2C error: {0}")]
    Other(String),

    #[cfg(target_os = "linux")]
    #[error("Linux I2C device error: {0}")]
    Linux(#[from] LinuxI2CError),
}

/// Errors reported by SPI bus implementations
#[derive(Error, Debug)]
pub enum SpiError {
    #[error("Mode fault")]
    ModeFault,

    #[error("Data overrun")]
    Overrun,

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Expected a {expected} byte response, got {actual}")]
    ResponseLength { expected: usize, actual: usize },

    #[error("No response queued for read of {len} byte(s)")]
    NoResponse { len: usize },

    #[error("SPI error: {0}")]
    Other(String),
}

/// Errors reported by accelerometer implementations that do not sit on a bus
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccelerometerError {
    #[error("Samples queue is empty")]
    SamplesExhausted,
}

/// Errors reported by device drivers layered over a bus
#[derive(Error, Debug)]
pub enum DeviceError<E> {
    #[error("Bus communication failed: {0}")]
    Bus(#[source] E),

    #[error("Device '{device}' is not responding (report was all {byte:#04x})")]
    Disconnected { device: &'static str, byte: u8 },
}

/// Errors reported by counter based timing utilities
#[derive(Error, Debug)]
pub enum CounterError<E> {
    #[error("Counter read failed: {0}")]
    Counter(#[source] E),

    #[error("Counter reported an operating frequency of 0 Hz")]
    InvalidFrequency,

    #[error("Duration of {nanos}ns exceeds the counter's range at {frequency_hz}Hz")]
    OutOfRange { nanos: u128, frequency_hz: u32 },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Result type aliases for convenience
pub type I2cResult<T> = Result<T, I2cError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
