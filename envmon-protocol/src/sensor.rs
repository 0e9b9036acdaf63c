//! Read-only sensor endpoints

use embedded_io::{ErrorType, Read, Write};
use envmon_core::{ClimateSensor, LightSensor};

use crate::codec::{climate_line, light_line};
use crate::endpoint::{Endpoint, LineCursor};
use crate::error::EndpointError;

/// Light sensor endpoint, yields `"<lux>.<d>"`
pub struct LightEndpoint<S> {
    sensor: S,
    cursor: LineCursor,
}

impl<S: LightSensor> LightEndpoint<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            cursor: LineCursor::default(),
        }
    }

    pub fn into_inner(self) -> S {
        self.sensor
    }
}

impl<S> Endpoint for LightEndpoint<S> {
    fn open(&mut self) {
        self.cursor = LineCursor::Fresh;
    }
}

impl<S> ErrorType for LightEndpoint<S> {
    type Error = EndpointError;
}

impl<S: LightSensor> Read for LightEndpoint<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, EndpointError> {
        let sensor = &mut self.sensor;
        let n = self
            .cursor
            .read(buf, || sensor.read_lux().map(light_line))?;
        Ok(n)
    }
}

impl<S: LightSensor> Write for LightEndpoint<S> {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, EndpointError> {
        Err(EndpointError::Unsupported)
    }

    fn flush(&mut self) -> Result<(), EndpointError> {
        Ok(())
    }
}

/// Temperature/humidity endpoint, yields `"<temp>.<d>-<hum>.<d>"`
pub struct ClimateEndpoint<S> {
    sensor: S,
    cursor: LineCursor,
}

impl<S: ClimateSensor> ClimateEndpoint<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            cursor: LineCursor::default(),
        }
    }

    pub fn into_inner(self) -> S {
        self.sensor
    }
}

impl<S> Endpoint for ClimateEndpoint<S> {
    fn open(&mut self) {
        self.cursor = LineCursor::Fresh;
    }
}

impl<S> ErrorType for ClimateEndpoint<S> {
    type Error = EndpointError;
}

impl<S: ClimateSensor> Read for ClimateEndpoint<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, EndpointError> {
        let sensor = &mut self.sensor;
        let n = self
            .cursor
            .read(buf, || sensor.read_climate().map(|r| climate_line(&r)))?;
        Ok(n)
    }
}

impl<S: ClimateSensor> Write for ClimateEndpoint<S> {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, EndpointError> {
        Err(EndpointError::Unsupported)
    }

    fn flush(&mut self) -> Result<(), EndpointError> {
        Ok(())
    }
}
