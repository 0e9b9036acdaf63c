//! SPI bus over `/dev/spidevB.C`

use std::io;
use std::path::Path;

use embedded_hal::spi::SpiDevice as _;
use envmon_hal::spi::{Mode, SpiBus, SpiConfig};
use linux_embedded_hal::SpidevDevice;
use spidev::{SpiModeFlags, Spidev, SpidevOptions};

use crate::error::LinuxBusError;

/// SPI device backed by a `spidev` node
///
/// The kernel drives chip-select, so each write is one CS assertion.
pub struct LinuxSpi {
    dev: SpidevDevice,
}

impl LinuxSpi {
    /// Open and configure a spidev node, e.g. `/dev/spidev0.0`
    pub fn open<P: AsRef<Path>>(path: P, config: SpiConfig) -> io::Result<Self> {
        let mut spi = Spidev::open(path)?;

        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(config.frequency)
            .mode(mode_flags(config.mode))
            .build();
        spi.configure(&options)?;

        Ok(Self {
            dev: SpidevDevice(spi),
        })
    }
}

fn mode_flags(mode: Mode) -> SpiModeFlags {
    match mode {
        Mode::Mode0 => SpiModeFlags::SPI_MODE_0,
        Mode::Mode1 => SpiModeFlags::SPI_MODE_1,
        Mode::Mode2 => SpiModeFlags::SPI_MODE_2,
        Mode::Mode3 => SpiModeFlags::SPI_MODE_3,
    }
}

impl SpiBus for LinuxSpi {
    type Error = LinuxBusError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dev.write(data).map_err(LinuxBusError::from_spi)
    }
}
