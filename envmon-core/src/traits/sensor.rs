//! Sensor traits and the acquisition error taxonomy

use core::fmt;

use crate::measurement::{ClimateReading, Illuminance};

/// Which part of a bus transaction failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Command bytes were not accepted
    Send,
    /// The receive transaction failed
    Receive,
    /// The receive completed with fewer bytes than requested
    ShortRead { expected: u8, received: u8 },
}

/// Measurement channel covered by a checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Temperature,
    Humidity,
}

/// Errors that can occur while acquiring a measurement
///
/// `Bus` means no data arrived; `Integrity` means data arrived but is
/// corrupted. Neither is retried or replaced by a default value inside
/// the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transfer did not complete as requested
    Bus(BusFault),
    /// Received word failed its checksum
    Integrity(Channel),
}

impl SensorError {
    /// True if data arrived but failed validation
    pub fn is_integrity(&self) -> bool {
        matches!(self, SensorError::Integrity(_))
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Bus(BusFault::Send) => f.write_str("bus error: command not sent"),
            SensorError::Bus(BusFault::Receive) => f.write_str("bus error: receive failed"),
            SensorError::Bus(BusFault::ShortRead { expected, received }) => write!(
                f,
                "bus error: received {} of {} bytes",
                received, expected
            ),
            SensorError::Integrity(Channel::Temperature) => {
                f.write_str("checksum mismatch on temperature word")
            }
            SensorError::Integrity(Channel::Humidity) => {
                f.write_str("checksum mismatch on humidity word")
            }
        }
    }
}

/// Trait for ambient light sensors
pub trait LightSensor {
    /// Trigger a one-shot measurement and return illuminance
    ///
    /// Blocks for the sensor's conversion time.
    fn read_lux(&mut self) -> Result<Illuminance, SensorError>;
}

/// Trait for combined temperature/humidity sensors
pub trait ClimateSensor {
    /// Trigger a one-shot measurement and return both channels
    ///
    /// Either both channels are valid or an error is returned.
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError>;
}

impl<T: LightSensor + ?Sized> LightSensor for &mut T {
    fn read_lux(&mut self) -> Result<Illuminance, SensorError> {
        T::read_lux(self)
    }
}

impl<T: ClimateSensor + ?Sized> ClimateSensor for &mut T {
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        T::read_climate(self)
    }
}
