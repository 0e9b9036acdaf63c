//! Hardware abstraction traits
//!
//! These traits define the interface between the endpoint layer and the
//! device-specific drivers.

pub mod display;
pub mod sensor;

pub use display::{DisplayError, StatusDisplay};
pub use sensor::{BusFault, Channel, ClimateSensor, LightSensor, SensorError};
