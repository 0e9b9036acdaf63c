//! BH1750 ambient light sensor
//!
//! 16-bit digital light sensor on I2C. Only the one-time high-resolution
//! mode is used: the sensor measures once, stores the result and powers
//! down, so no explicit power management is needed between reads.

use envmon_core::{Illuminance, LightSensor, SensorError};
use envmon_hal::{Delay, I2cBus};

use super::measure;

/// Address with ADDR pin low
pub const DEFAULT_ADDRESS: u8 = 0x23;

/// Address with ADDR pin high
pub const ALT_ADDRESS: u8 = 0x5C;

/// Conversion time for high-resolution mode (datasheet max 180 ms at
/// default sensitivity, typical 120 ms)
pub const CONVERSION_DELAY_MS: u32 = 120;

/// BH1750 instruction set
#[allow(dead_code)]
mod cmd {
    pub const POWER_DOWN: u8 = 0x00;
    pub const POWER_ON: u8 = 0x01;
    pub const RESET: u8 = 0x07;
    /// One measurement at 1 lx resolution, then power down
    pub const ONE_TIME_HIGH_RES: u8 = 0x20;
}

/// BH1750 driver
pub struct Bh1750<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Bh1750<I2C, D>
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

    /// Run one measurement and return the raw big-endian count
    pub fn read_raw(&mut self) -> Result<u16, SensorError> {
        let buf: [u8; 2] = measure(
            &mut self.i2c,
            &mut self.delay,
            self.address,
            &[cmd::ONE_TIME_HIGH_RES],
            CONVERSION_DELAY_MS,
        )?;

        Ok(u16::from_be_bytes(buf))
    }

    /// Detach the driver and return its bus client and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> LightSensor for Bh1750<I2C, D>
where
    I2C: I2cBus,
    D: Delay,
{
    fn read_lux(&mut self) -> Result<Illuminance, SensorError> {
        self.read_raw().map(Illuminance::from_raw)
    }
}
