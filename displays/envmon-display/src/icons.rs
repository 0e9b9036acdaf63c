//! Status row icons
//!
//! Same encoding as the font: 8 column strips, LSB at the top.

use crate::font::Glyph;

/// Temperature row
pub const THERMOMETER: Glyph = [0x04, 0x0A, 0x0A, 0x0A, 0x0E, 0x1F, 0x1F, 0x0E];

/// Humidity row
pub const DROPLET: Glyph = [0x04, 0x04, 0x0A, 0x0A, 0x11, 0x11, 0x0A, 0x04];

/// Light row
pub const SUN: Glyph = [0x00, 0x15, 0x0E, 0x1F, 0x1F, 0x0E, 0x15, 0x00];
