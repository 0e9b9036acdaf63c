//! Endpoint errors

use core::fmt;

use embedded_io::ErrorKind;
use envmon_core::{DisplayError, SensorError};

/// Errors returned by endpoint reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndpointError {
    /// The sensor measurement failed
    Sensor(SensorError),
    /// The display could not be updated
    Display(DisplayError),
    /// The endpoint does not support this direction
    Unsupported,
}

impl From<SensorError> for EndpointError {
    fn from(e: SensorError) -> Self {
        EndpointError::Sensor(e)
    }
}

impl From<DisplayError> for EndpointError {
    fn from(e: DisplayError) -> Self {
        EndpointError::Display(e)
    }
}

impl embedded_io::Error for EndpointError {
    fn kind(&self) -> ErrorKind {
        match self {
            EndpointError::Sensor(e) if e.is_integrity() => ErrorKind::InvalidData,
            EndpointError::Unsupported => ErrorKind::Unsupported,
            _ => ErrorKind::Other,
        }
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointError::Sensor(e) => write!(f, "sensor: {}", e),
            EndpointError::Display(e) => write!(f, "display: {}", e),
            EndpointError::Unsupported => f.write_str("operation not supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EndpointError {}
