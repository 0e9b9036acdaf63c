//! I2C bus over `/dev/i2c-N`

use std::io;
use std::path::Path;

use embedded_hal::i2c::I2c as _;
use envmon_hal::I2cBus;
use linux_embedded_hal::I2cdev;

use crate::error::LinuxBusError;

/// I2C bus client backed by an `i2c-dev` node
pub struct LinuxI2c {
    dev: I2cdev,
}

impl LinuxI2c {
    /// Open an I2C adapter, e.g. `/dev/i2c-1`
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let dev = I2cdev::new(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(Self { dev })
    }
}

impl I2cBus for LinuxI2c {
    type Error = LinuxBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.dev
            .write(address, data)
            .map_err(LinuxBusError::from_i2c)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // i2c-dev either fills the whole buffer or fails the transfer
        self.dev
            .read(address, buf)
            .map_err(LinuxBusError::from_i2c)?;
        Ok(buf.len())
    }
}
