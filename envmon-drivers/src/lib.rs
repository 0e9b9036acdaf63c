//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the sensor traits
//! defined in envmon-core:
//!
//! - Ambient light (BH1750)
//! - Temperature and humidity (SHT30)
//!
//! Drivers own their bus client and delay for their whole lifetime and
//! hand them back on [`release`](sensor::bh1750::Bh1750::release).

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;

pub use sensor::bh1750::Bh1750;
pub use sensor::sht30::Sht30;
