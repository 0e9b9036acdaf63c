//! Scripted I2C bus and recording delay for driver tests

use envmon_hal::{Delay, I2cBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// I2C bus that records writes and replays one scripted response
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub reads: Vec<u8>,
    pub response: Vec<u8>,
    /// Override for the reported byte count
    pub short_by: usize,
    pub fail_write: bool,
    pub fail_read: bool,
}

impl MockI2c {
    pub fn responding(bytes: &[u8]) -> Self {
        Self {
            response: bytes.to_vec(),
            ..Self::default()
        }
    }
}

impl I2cBus for MockI2c {
    type Error = MockBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_write {
            return Err(MockBusError);
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_read {
            return Err(MockBusError);
        }
        self.reads.push(address);
        let n = buf.len().min(self.response.len());
        buf[..n].copy_from_slice(&self.response[..n]);
        Ok(n.saturating_sub(self.short_by))
    }
}

/// Delay that records requested waits instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    pub waits: Vec<u32>,
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.waits.push(ms);
    }
}
