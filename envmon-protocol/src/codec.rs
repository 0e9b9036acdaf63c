//! ASCII line codec
//!
//! Sensor lines are produced from validated measurements; display lines
//! are parsed from whatever bytes the writer hands over.

use core::fmt::Write;

use envmon_core::{ClimateReading, Illuminance};
use heapless::String;

/// Capacity of a formatted sensor line
///
/// The longest possible climate line is "-45.0-100.0" (11 bytes).
pub const MAX_LINE: usize = 32;

/// Bytes of a display write that are interpreted
pub const MAX_PAYLOAD: usize = 127;

/// Field separator on the display payload
pub const DELIMITER: char = '-';

/// One formatted sensor line
pub type Line = String<MAX_LINE>;

/// Format an illuminance as `"<lux>.<tenths>"`
pub fn light_line(lux: Illuminance) -> Line {
    let mut line = Line::new();
    // Bounded by MAX_LINE
    let _ = write!(line, "{}", lux);
    line
}

/// Format a climate reading as `"<temp>.<d>-<hum>.<d>"`
pub fn climate_line(reading: &ClimateReading) -> Line {
    let mut line = Line::new();
    // Bounded by MAX_LINE
    let _ = write!(line, "{}{}{}", reading.temperature, DELIMITER, reading.humidity);
    line
}

/// The three value strings of a display write
///
/// Borrowed from the written bytes and valid for one write only. Missing
/// fields are empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayLine<'a> {
    pub temperature: &'a str,
    pub humidity: &'a str,
    pub light: &'a str,
}

impl<'a> DisplayLine<'a> {
    /// Parse raw written bytes
    ///
    /// Only the first [`MAX_PAYLOAD`] bytes are considered. Bytes from the
    /// first invalid UTF-8 sequence onwards are dropped.
    pub fn from_bytes(payload: &'a [u8]) -> Self {
        let payload = &payload[..payload.len().min(MAX_PAYLOAD)];
        let text = match core::str::from_utf8(payload) {
            Ok(text) => text,
            Err(e) => core::str::from_utf8(&payload[..e.valid_up_to()]).unwrap_or_default(),
        };
        Self::parse(text)
    }

    /// Parse `"<temp>-<hum>-<lux>"` with an optional trailing newline
    ///
    /// A `-` at the very start belongs to the temperature. Text after the
    /// third field is ignored.
    pub fn parse(payload: &'a str) -> Self {
        let payload = payload.strip_suffix('\n').unwrap_or(payload);

        let (temperature, rest) = split_field(payload, true);
        let (humidity, rest) = rest.map_or(("", None), |rest| split_field(rest, false));
        let (light, _) = rest.map_or(("", None), |rest| split_field(rest, false));

        Self {
            temperature,
            humidity,
            light,
        }
    }
}

/// Split off one field, returning it and the text after its delimiter
fn split_field(text: &str, signed: bool) -> (&str, Option<&str>) {
    let start = usize::from(signed && text.starts_with(DELIMITER));

    match text[start..].find(DELIMITER) {
        Some(at) => {
            let end = start + at;
            (&text[..end], Some(&text[end + DELIMITER.len_utf8()..]))
        }
        None => (text, None),
    }
}
