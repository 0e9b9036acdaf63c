//! Device Endpoint Protocol
//!
//! Each device is exposed to the acquisition process as a byte stream
//! carrying one ASCII line:
//!
//! ```text
//! light    read   "<lux>.<d>"                 e.g. "333.3"
//! climate  read   "<temp>.<d>-<hum>.<d>"      e.g. "-7.5-50.0"
//! display  write  "<temp>-<hum>-<lux>[\n]"    e.g. "25.5-60.2-1250"
//! ```
//!
//! Sensor endpoints behave like a freshly opened device file: the first
//! read measures, later reads drain the line and then report end of file
//! until the endpoint is opened again.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod codec;
pub mod display;
pub mod endpoint;
pub mod error;
pub mod sensor;

pub use codec::{climate_line, light_line, DisplayLine, Line, MAX_LINE, MAX_PAYLOAD};
pub use display::DisplayEndpoint;
pub use endpoint::Endpoint;
pub use error::EndpointError;
pub use sensor::{ClimateEndpoint, LightEndpoint};
