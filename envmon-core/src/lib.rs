//! Board-agnostic core logic for the environment monitor
//!
//! This crate contains everything that does not depend on a specific bus
//! or platform:
//!
//! - Fixed-point measurement types and the sensors' transfer functions
//! - CRC-8 integrity check used by the humidity sensor
//! - Hardware abstraction traits (light sensor, climate sensor, display)
//!
//! No floating point is used anywhere; every value is an integer in a
//! fixed sub-unit (tenths of lux, thousandths of a degree or percent).

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod crc;
pub mod measurement;
pub mod traits;

pub use measurement::{ClimateReading, Humidity, Illuminance, Temperature};
pub use traits::{
    BusFault, Channel, ClimateSensor, DisplayError, LightSensor, SensorError, StatusDisplay,
};
