//! Configuration loading
//!
//! Reads the TOML configuration file. A missing file falls back to the
//! built-in defaults, which match the reference deployment on a
//! Raspberry Pi class board.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use envmon_display::ssd1306::DEFAULT_CONTRAST;
use envmon_drivers::sensor::{bh1750, sht30};
use envmon_hal::i2c::is_valid_address;
use log::info;
use serde::Deserialize;

/// Configuration file used when none is given on the command line
pub const DEFAULT_PATH: &str = "/etc/envmon.toml";

/// Longest accepted pause between acquisition cycles (one day)
pub const MAX_INTERVAL_SECS: u64 = 86_400;

/// Longest accepted log retention (about a century)
pub const MAX_RETENTION_DAYS: u32 = 36_500;

/// Bus and GPIO device nodes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    /// I2C adapter shared by both sensors
    pub i2c: PathBuf,
    /// SPI device of the display
    pub spi: PathBuf,
    /// SPI clock in Hz
    pub spi_hz: u32,
    /// GPIO chip holding the display's D/C and reset lines
    pub gpio_chip: PathBuf,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            i2c: PathBuf::from("/dev/i2c-1"),
            spi: PathBuf::from("/dev/spidev0.0"),
            spi_hz: 8_000_000,
            gpio_chip: PathBuf::from("/dev/gpiochip0"),
        }
    }
}

/// Light sensor settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    pub address: u8,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            address: bh1750::DEFAULT_ADDRESS,
        }
    }
}

/// Temperature/humidity sensor settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateConfig {
    pub address: u8,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            address: sht30::DEFAULT_ADDRESS,
        }
    }
}

/// Display control lines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Line offset of the data/command select
    pub dc_line: u32,
    /// Line offset of the reset
    pub reset_line: u32,
    /// Contrast applied after attach
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dc_line: 24,
            reset_line: 25,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Seconds between acquisition cycles
    pub interval_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

/// Daily data log
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub dir: PathBuf,
    /// Files older than this many days are removed at start-up
    pub retention_days: u32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/var/log/sensor_monitor"),
            retention_days: 7,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bus: BusConfig,
    pub light: LightConfig,
    pub climate: ClimateConfig,
    pub display: DisplayConfig,
    pub monitor: MonitorConfig,
    pub log: LogConfig,
}

impl Config {
    /// Load from `path`, or use defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No configuration at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };

        let config =
            Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the types alone do not enforce
    pub fn validate(&self) -> Result<()> {
        ensure!(
            is_valid_address(self.light.address),
            "light.address {:#04x} is not a 7-bit I2C address",
            self.light.address
        );
        ensure!(
            is_valid_address(self.climate.address),
            "climate.address {:#04x} is not a 7-bit I2C address",
            self.climate.address
        );
        ensure!(
            self.display.dc_line != self.display.reset_line,
            "display.dc_line and display.reset_line must differ"
        );
        ensure!(self.bus.spi_hz > 0, "bus.spi_hz must be positive");
        ensure!(
            (1..=MAX_INTERVAL_SECS).contains(&self.monitor.interval_secs),
            "monitor.interval_secs must be between 1 and {}",
            MAX_INTERVAL_SECS
        );
        ensure!(
            (1..=MAX_RETENTION_DAYS).contains(&self.log.retention_days),
            "log.retention_days must be between 1 and {}",
            MAX_RETENTION_DAYS
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.bus.i2c, Path::new("/dev/i2c-1"));
        assert_eq!(config.bus.spi, Path::new("/dev/spidev0.0"));
        assert_eq!(config.bus.spi_hz, 8_000_000);
        assert_eq!(config.bus.gpio_chip, Path::new("/dev/gpiochip0"));
        assert_eq!(config.light.address, 0x23);
        assert_eq!(config.climate.address, 0x44);
        assert_eq!(config.display.dc_line, 24);
        assert_eq!(config.display.reset_line, 25);
        assert_eq!(config.monitor.interval_secs, 5);
        assert_eq!(config.log.dir, Path::new("/var/log/sensor_monitor"));
        assert_eq!(config.log.retention_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_file_matches_defaults() {
        let config = Config::from_toml(include_str!("../envmon.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            [light]
            address = 0x5C

            [monitor]
            interval_secs = 30

            [log]
            dir = "/tmp/envmon"
            "#,
        )
        .unwrap();

        assert_eq!(config.light.address, 0x5C);
        assert_eq!(config.monitor.interval_secs, 30);
        assert_eq!(config.log.dir, Path::new("/tmp/envmon"));
        assert_eq!(config.log.retention_days, 7);
        assert_eq!(config.climate, ClimateConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("[monitor]\ninterval = 5\n").is_err());
        assert!(Config::from_toml("[sensors]\n").is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml("[light]\naddress = 0x80\n").is_err());
        assert!(Config::from_toml("[monitor]\ninterval_secs = 0\n").is_err());
        assert!(Config::from_toml("[log]\nretention_days = 0\n").is_err());
        assert!(Config::from_toml("[display]\ndc_line = 25\n").is_err());
        assert!(Config::from_toml("[climate]\naddress = 300\n").is_err());
    }

    #[test]
    fn test_upper_bounds() {
        assert!(Config::from_toml("[monitor]\ninterval_secs = 86400\n").is_ok());
        assert!(Config::from_toml("[monitor]\ninterval_secs = 86401\n").is_err());
        assert!(Config::from_toml("[monitor]\ninterval_secs = 18446744073709551615\n").is_err());

        assert!(Config::from_toml("[log]\nretention_days = 36500\n").is_ok());
        assert!(Config::from_toml("[log]\nretention_days = 36501\n").is_err());
        assert!(Config::from_toml("[log]\nretention_days = 4000000000\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envmon.toml");
        fs::write(&path, "[bus]\nspi_hz = \"fast\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("envmon.toml"));
    }
}
