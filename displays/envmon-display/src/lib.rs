//! Status display for the environment monitor
//!
//! This crate provides:
//! - An SSD1306 driver that writes 8x8 cells straight into display RAM
//! - The 8x8 font and the three status icons
//! - The status and start-up screen layouts (`StatusDisplay` impl)
//!
//! # Architecture
//!
//! The panel is driven over 4-wire SPI with separate data/command and
//! reset lines. Nothing is buffered locally: a status refresh clears the
//! panel and redraws every cell, so the screen always reflects the most
//! recent values only.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod font;
pub mod icons;
pub mod layout;
pub mod ssd1306;

pub use ssd1306::{DcMode, PanelState, Ssd1306};
