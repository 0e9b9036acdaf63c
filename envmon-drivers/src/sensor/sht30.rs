//! SHT30 temperature and humidity sensor
//!
//! Single-shot measurement, high repeatability, clock stretching
//! disabled. The sensor answers with two 16-bit words, each followed by
//! its CRC-8:
//!
//! ```text
//! ┌────────┬────────┬──────────┬────────┬────────┬──────────┐
//! │ T MSB  │ T LSB  │ T CRC    │ RH MSB │ RH LSB │ RH CRC   │
//! └────────┴────────┴──────────┴────────┴────────┴──────────┘
//! ```

use envmon_core::crc::verify_word;
use envmon_core::{Channel, ClimateReading, ClimateSensor, Humidity, SensorError, Temperature};
use envmon_hal::{Delay, I2cBus};

use super::measure;

/// Address with ADDR pin low
pub const DEFAULT_ADDRESS: u8 = 0x44;

/// Address with ADDR pin high
pub const ALT_ADDRESS: u8 = 0x45;

/// Wait after the measurement command (high repeatability max 15.5 ms)
pub const CONVERSION_DELAY_MS: u32 = 20;

/// Length of a measurement response
pub const RESPONSE_LEN: usize = 6;

mod cmd {
    /// Single shot, high repeatability, no clock stretching
    pub const MEASURE_HIGH_REP: [u8; 2] = [0x24, 0x00];
}

/// SHT30 driver
pub struct Sht30<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Sht30<I2C, D>
where
    I2C: I2cBus,
    D: Delay,
{
    /// Create a driver at the default address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    /// The 7-bit bus address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Run one measurement and return the unvalidated response
    pub fn read_raw(&mut self) -> Result<[u8; RESPONSE_LEN], SensorError> {
        measure(
            &mut self.i2c,
            &mut self.delay,
            self.address,
            &cmd::MEASURE_HIGH_REP,
            CONVERSION_DELAY_MS,
        )
    }

    /// Detach the driver and return its bus client and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

/// Validate both checksums and convert a measurement response
///
/// Both words must pass before either is converted.
pub fn decode(buf: &[u8; RESPONSE_LEN]) -> Result<ClimateReading, SensorError> {
    let temp_word = [buf[0], buf[1]];
    let hum_word = [buf[3], buf[4]];

    if !verify_word(temp_word, buf[2]) {
        return Err(SensorError::Integrity(Channel::Temperature));
    }
    if !verify_word(hum_word, buf[5]) {
        return Err(SensorError::Integrity(Channel::Humidity));
    }

    Ok(ClimateReading {
        temperature: Temperature::from_raw(u16::from_be_bytes(temp_word)),
        humidity: Humidity::from_raw(u16::from_be_bytes(hum_word)),
    })
}

impl<I2C, D> ClimateSensor for Sht30<I2C, D>
where
    I2C: I2cBus,
    D: Delay,
{
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        let buf = self.read_raw()?;
        decode(&buf)
    }
}
