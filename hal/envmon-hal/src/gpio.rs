//! GPIO pin abstractions
//!
//! Provides the output-line trait used for the display's reset and
//! data/command select lines.

/// Digital output pin
///
/// Unlike on-chip registers, a userspace GPIO line can fail to change
/// state, so every operation is fallible.
pub trait OutputPin {
    /// Error type for line operations
    type Error;

    /// Set the pin high (logic 1)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Set the pin low (logic 0)
    fn set_low(&mut self) -> Result<(), Self::Error>;

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    type Error = T::Error;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        T::set_high(self)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        T::set_low(self)
    }
}
