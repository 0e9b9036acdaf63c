//! EnvMon Hardware Abstraction Layer
//!
//! This crate defines the bus transaction traits the drivers are written
//! against. A platform crate implements them for real hardware; tests
//! implement them with in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (envmon-drivers, -display)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  envmon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  envmon-hal-  │
//!             │     linux     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - 2-wire addressed bus
//! - [`spi::SpiBus`] - 4-wire clocked bus
//! - [`gpio::OutputPin`] - Control lines (reset, data/command select)
//! - [`delay::Delay`] - Blocking settling delays
//!
//! Every transaction is blocking and either completes or fails as a whole.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::{Mode, SpiBus, SpiConfig};
