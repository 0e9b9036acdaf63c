//! Write-only display endpoint

use embedded_io::{ErrorType, Read, Write};
use envmon_core::StatusDisplay;

use crate::codec::DisplayLine;
use crate::endpoint::Endpoint;
use crate::error::EndpointError;

/// Status display endpoint, accepts `"<temp>-<hum>-<lux>"`
///
/// Every non-empty write redraws the whole status screen.
pub struct DisplayEndpoint<D> {
    display: D,
}

impl<D: StatusDisplay> DisplayEndpoint<D> {
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn into_inner(self) -> D {
        self.display
    }
}

impl<D> Endpoint for DisplayEndpoint<D> {
    fn open(&mut self) {}
}

impl<D> ErrorType for DisplayEndpoint<D> {
    type Error = EndpointError;
}

impl<D: StatusDisplay> Write for DisplayEndpoint<D> {
    /// Render one payload
    ///
    /// The whole buffer is reported as written even when only its first
    /// [`MAX_PAYLOAD`](crate::codec::MAX_PAYLOAD) bytes were interpreted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, EndpointError> {
        if buf.is_empty() {
            return Ok(0);
        }

        let line = DisplayLine::from_bytes(buf);
        self.display
            .render_status(line.temperature, line.humidity, line.light)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), EndpointError> {
        Ok(())
    }
}

impl<D: StatusDisplay> Read for DisplayEndpoint<D> {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, EndpointError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envmon_core::DisplayError;
    use std::string::{String, ToString};
    use std::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        screens: Vec<[String; 3]>,
        fail: bool,
    }

    impl StatusDisplay for Recorder {
        fn render_status(
            &mut self,
            temperature: &str,
            humidity: &str,
            light: &str,
        ) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.screens.push([
                temperature.to_string(),
                humidity.to_string(),
                light.to_string(),
            ]);
            Ok(())
        }

        fn render_startup(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    #[test]
    fn test_write_renders_fields() {
        let mut endpoint = DisplayEndpoint::new(Recorder::default());

        assert_eq!(endpoint.write(b"25.5-60.2-1250\n").unwrap(), 15);

        let recorder = endpoint.into_inner();
        assert_eq!(recorder.screens.len(), 1);
        assert_eq!(recorder.screens[0], ["25.5", "60.2", "1250"]);
    }

    #[test]
    fn test_oversized_write_is_fully_consumed() {
        let mut endpoint = DisplayEndpoint::new(Recorder::default());
        let payload = [b'7'; 300];

        assert_eq!(endpoint.write(&payload).unwrap(), 300);

        let recorder = endpoint.into_inner();
        assert_eq!(recorder.screens[0][0].len(), 127);
    }

    #[test]
    fn test_empty_write_does_not_redraw() {
        let mut endpoint = DisplayEndpoint::new(Recorder::default());

        assert_eq!(endpoint.write(b"").unwrap(), 0);
        assert!(endpoint.into_inner().screens.is_empty());
    }

    #[test]
    fn test_display_failure_surfaces() {
        let mut endpoint = DisplayEndpoint::new(Recorder {
            fail: true,
            ..Default::default()
        });

        assert_eq!(
            endpoint.write(b"1-2-3"),
            Err(EndpointError::Display(DisplayError::Communication))
        );
    }

    #[test]
    fn test_read_is_always_eof() {
        let mut endpoint = DisplayEndpoint::new(Recorder::default());
        let mut buf = [0u8; 8];

        endpoint.open();
        assert_eq!(endpoint.read(&mut buf).unwrap(), 0);
    }
}
