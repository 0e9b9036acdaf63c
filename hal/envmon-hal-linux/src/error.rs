//! Error type shared by the Linux bus adapters

use core::fmt;

use embedded_hal::{digital, i2c, spi};

/// Error from a Linux bus or line operation
///
/// Keeps only the embedded-hal error kind; the underlying OS error is
/// reported by the adapter that opened the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinuxBusError {
    /// I2C transfer failed
    I2c(i2c::ErrorKind),
    /// SPI transfer failed
    Spi(spi::ErrorKind),
    /// GPIO line could not be driven
    Gpio(digital::ErrorKind),
}

impl fmt::Display for LinuxBusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinuxBusError::I2c(kind) => write!(f, "i2c transfer failed: {kind}"),
            LinuxBusError::Spi(kind) => write!(f, "spi transfer failed: {kind}"),
            LinuxBusError::Gpio(kind) => write!(f, "gpio line error: {kind}"),
        }
    }
}

impl std::error::Error for LinuxBusError {}

impl LinuxBusError {
    pub(crate) fn from_i2c<E: i2c::Error>(e: E) -> Self {
        LinuxBusError::I2c(e.kind())
    }

    pub(crate) fn from_spi<E: spi::Error>(e: E) -> Self {
        LinuxBusError::Spi(e.kind())
    }

    pub(crate) fn from_gpio<E: digital::Error>(e: E) -> Self {
        LinuxBusError::Gpio(e.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_kind_text() {
        let kind = digital::ErrorKind::Other;
        assert_eq!(
            LinuxBusError::Gpio(kind).to_string(),
            format!("gpio line error: {kind}")
        );
        assert_eq!(
            LinuxBusError::I2c(i2c::ErrorKind::Bus).to_string(),
            format!("i2c transfer failed: {}", i2c::ErrorKind::Bus)
        );
    }
}
