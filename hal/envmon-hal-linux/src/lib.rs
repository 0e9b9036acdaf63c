//! Linux implementation of the EnvMon HAL
//!
//! Maps the [`envmon_hal`] traits onto Linux userspace device nodes:
//!
//! - `/dev/i2c-N` through `i2c-dev` ([`LinuxI2c`])
//! - `/dev/spidevB.C` through `spidev` ([`LinuxSpi`])
//! - `/dev/gpiochipN` lines through the GPIO character device ([`LinuxPin`])
//! - `std::thread::sleep` based delays ([`LinuxDelay`])
//!
//! Each handle is opened once and owned by exactly one driver.

#![deny(unsafe_code)]

pub mod delay;
pub mod error;
pub mod gpio;
pub mod i2c;
pub mod spi;

pub use delay::LinuxDelay;
pub use error::LinuxBusError;
pub use gpio::LinuxPin;
pub use i2c::LinuxI2c;
pub use spi::LinuxSpi;
