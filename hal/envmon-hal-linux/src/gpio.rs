//! Output lines through the GPIO character device

use std::io;
use std::path::Path;

use embedded_hal::digital::OutputPin as _;
use envmon_hal::OutputPin;
use gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::CdevPin;

use crate::error::LinuxBusError;

/// A single requested output line
///
/// The line is released back to the kernel when this is dropped.
pub struct LinuxPin {
    pin: CdevPin,
}

impl LinuxPin {
    /// Request `line` on `chip` as an output with the given initial level
    ///
    /// # Arguments
    /// - `chip`: GPIO chip node, e.g. `/dev/gpiochip0`
    /// - `line`: Line offset on that chip
    /// - `high`: Initial output level
    /// - `consumer`: Label shown by `gpioinfo`
    pub fn request<P: AsRef<Path>>(
        chip: P,
        line: u32,
        high: bool,
        consumer: &str,
    ) -> io::Result<Self> {
        let to_io = |e: gpio_cdev::errors::Error| io::Error::new(io::ErrorKind::Other, e);

        let mut chip = Chip::new(chip).map_err(to_io)?;
        let handle = chip
            .get_line(line)
            .map_err(to_io)?
            .request(LineRequestFlags::OUTPUT, u8::from(high), consumer)
            .map_err(to_io)?;
        let pin = CdevPin::new(handle).map_err(to_io)?;

        Ok(Self { pin })
    }
}

impl OutputPin for LinuxPin {
    type Error = LinuxBusError;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high().map_err(LinuxBusError::from_gpio)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low().map_err(LinuxBusError::from_gpio)
    }
}
