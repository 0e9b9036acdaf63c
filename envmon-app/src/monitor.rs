//! One acquisition cycle
//!
//! Reads the climate endpoint, then the light endpoint, and pushes the
//! combined `"<temp>-<hum>-<lux>"` payload to the display endpoint. A
//! failed read is replaced by `ERROR` placeholders so the display and the
//! data log always get a complete line.

use anyhow::{bail, Result};
use embedded_io::{Read, Write};
use envmon_protocol::{Endpoint, EndpointError, MAX_LINE};
use log::{error, info, warn};

/// Placeholder for a field whose sensor could not be read
pub const ERROR_FIELD: &str = "ERROR";

/// Placeholder for the two climate fields
pub const CLIMATE_ERROR: &str = "ERROR-ERROR";

/// Drives the three endpoints through acquisition cycles
pub struct Monitor<L, C, D> {
    light: L,
    climate: C,
    display: D,
}

impl<L, C, D> Monitor<L, C, D>
where
    L: Read<Error = EndpointError> + Endpoint,
    C: Read<Error = EndpointError> + Endpoint,
    D: Write<Error = EndpointError>,
{
    pub fn new(light: L, climate: C, display: D) -> Self {
        Self {
            light,
            climate,
            display,
        }
    }

    /// Run one cycle and return the payload sent to the display
    ///
    /// Endpoint failures are logged and never abort the cycle.
    pub fn cycle(&mut self) -> String {
        let climate = read_line(&mut self.climate).unwrap_or_else(|e| {
            warn!("Climate read failed: {:#}", e);
            CLIMATE_ERROR.to_string()
        });

        let light = read_line(&mut self.light).unwrap_or_else(|e| {
            warn!("Light read failed: {:#}", e);
            ERROR_FIELD.to_string()
        });

        let payload = format!("{}-{}", climate, light);
        info!("Display payload {:?}", payload);

        if let Err(e) = self.display.write(payload.as_bytes()) {
            error!("Display update failed: {}", e);
        }

        payload
    }

    pub fn into_parts(self) -> (L, C, D) {
        (self.light, self.climate, self.display)
    }
}

/// Open an endpoint and read its line once
fn read_line<E>(endpoint: &mut E) -> Result<String>
where
    E: Read<Error = EndpointError> + Endpoint,
{
    endpoint.open();

    let mut buf = [0u8; MAX_LINE];
    let n = endpoint.read(&mut buf)?;
    if n == 0 {
        bail!("no data available");
    }

    Ok(String::from_utf8_lossy(&buf[..n]).trim_end().to_string())
}
