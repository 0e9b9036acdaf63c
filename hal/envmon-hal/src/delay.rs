//! Blocking delays
//!
//! Sensor conversions and the display reset pulse need fixed waits.
//! These are sleeps, never spin loops, and cannot be cancelled.

/// Blocking millisecond delay
pub trait Delay {
    /// Block the caller for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
