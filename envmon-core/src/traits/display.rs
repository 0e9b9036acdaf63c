//! Status display trait

use core::fmt;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer to the controller failed
    Communication,
    /// Reset or data/command line could not be driven
    ControlLine,
    /// Drawing attempted before the init sequence ran
    NotInitialized,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display bus transfer failed"),
            DisplayError::ControlLine => f.write_str("display control line failed"),
            DisplayError::NotInitialized => f.write_str("display not initialized"),
        }
    }
}

/// Trait for the status screen
///
/// The display is a dumb renderer: callers hand it already formatted
/// value strings and it lays them out.
pub trait StatusDisplay {
    /// Redraw the status screen with the given value strings
    ///
    /// Units are appended by the display. Empty strings render as just
    /// the unit.
    fn render_status(
        &mut self,
        temperature: &str,
        humidity: &str,
        light: &str,
    ) -> Result<(), DisplayError>;

    /// Draw the start-up banner
    fn render_startup(&mut self) -> Result<(), DisplayError>;
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    fn render_status(
        &mut self,
        temperature: &str,
        humidity: &str,
        light: &str,
    ) -> Result<(), DisplayError> {
        T::render_status(self, temperature, humidity, light)
    }

    fn render_startup(&mut self) -> Result<(), DisplayError> {
        T::render_startup(self)
    }
}
