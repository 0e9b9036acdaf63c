//! I2C sensor drivers
//!
//! Both sensors use the same one-shot sequence: send a command, sleep
//! for the conversion time, then receive a fixed number of bytes.

pub mod bh1750;
pub mod sht30;

#[cfg(test)]
pub(crate) mod mock;

use envmon_core::{BusFault, SensorError};
use envmon_hal::{Delay, I2cBus};

/// Run one command / settle / receive cycle
///
/// The sequence is not interruptible; a caller waiting on the same
/// sensor blocks until it finishes.
pub(crate) fn measure<I2C, D, const N: usize>(
    i2c: &mut I2C,
    delay: &mut D,
    address: u8,
    command: &[u8],
    settle_ms: u32,
) -> Result<[u8; N], SensorError>
where
    I2C: I2cBus,
    D: Delay,
{
    i2c.write(address, command)
        .map_err(|_| SensorError::Bus(BusFault::Send))?;

    delay.delay_ms(settle_ms);

    let mut buf = [0u8; N];
    let received = i2c
        .read(address, &mut buf)
        .map_err(|_| SensorError::Bus(BusFault::Receive))?;

    if received < N {
        return Err(SensorError::Bus(BusFault::ShortRead {
            expected: N as u8,
            received: received as u8,
        }));
    }

    Ok(buf)
}
