use serde::Deserialize;
use std::collections::HashSet;
use std::fs;

use crate::bus::i2c::I2cSettings;
use crate::bus::spi::{Phase, Polarity, SpiSettings};
use crate::bus::BusType;
use crate::errors::{ConfigError, ConfigResult};

/// Root structure for loading `[[bus]]` style TOML config
#[derive(Debug, Deserialize)]
pub struct BusConfig {
    #[serde(rename = "bus", default)]
    pub buses: Vec<BusEntry>,
}

/// One bus entry (I2C or SPI)
#[derive(Debug, Deserialize)]
pub struct BusEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub path: String,
    pub clock_rate_hz: Option<u32>,
    /// SPI only
    pub polarity: Option<Polarity>,
    /// SPI only
    pub phase: Option<Phase>,
}

impl BusEntry {
    pub fn bus_type(&self) -> Option<BusType> {
        BusType::from_str(&self.r#type)
    }

    /// I2C settings for this entry, falling back to standard mode
    pub fn i2c_settings(&self) -> I2cSettings {
        self.clock_rate_hz
            .map(|clock_rate_hz| I2cSettings { clock_rate_hz })
            .unwrap_or_default()
    }

    /// SPI settings for this entry, falling back to the defaults per field
    pub fn spi_settings(&self) -> SpiSettings {
        let defaults = SpiSettings::default();
        SpiSettings {
            clock_rate_hz: self.clock_rate_hz.unwrap_or(defaults.clock_rate_hz),
            polarity: self.polarity.unwrap_or(defaults.polarity),
            phase: self.phase.unwrap_or(defaults.phase),
        }
    }
}

impl BusConfig {
    /// All entries of the given bus type, in file order
    pub fn buses_of(&self, bus_type: BusType) -> impl Iterator<Item = &BusEntry> {
        self.buses
            .iter()
            .filter(move |b| b.bus_type() == Some(bus_type))
    }

    fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for bus in &self.buses {
            if !seen.insert(bus.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate bus id '{}'",
                    bus.id
                )));
            }
            if bus.bus_type().is_none() {
                return Err(ConfigError::InvalidValue {
                    field: format!("bus.{}.type", bus.id),
                    reason: format!("unknown bus type '{}'", bus.r#type),
                });
            }
            if bus.clock_rate_hz == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: format!("bus.{}.clock_rate_hz", bus.id),
                    reason: "clock rate must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate bus config from a TOML string
pub fn parse_bus_config(content: &str) -> ConfigResult<BusConfig> {
    let parsed: BusConfig = toml::from_str(content)?;
    parsed.validate()?;
    Ok(parsed)
}

/// Load bus config file
pub fn load_bus_config(path: &str) -> ConfigResult<BusConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::LoadError {
        path: path.to_string(),
        source,
    })?;
    parse_bus_config(&content)
}
