//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by platform-specific HALs.

/// I2C bus master
///
/// Provides plain send and receive transactions for communicating with
/// peripheral devices. Each call is one complete bus transaction.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// Returns the number of bytes actually received. Drivers treat a
    /// count smaller than `buf.len()` as a failed transfer.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::read(self, address, buf)
    }
}

/// Largest valid 7-bit address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Check that an address fits in 7 bits
pub const fn is_valid_address(address: u8) -> bool {
    address <= MAX_ADDRESS
}
