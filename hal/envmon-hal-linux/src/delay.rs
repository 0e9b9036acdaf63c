//! Sleep-based delay

use std::thread;
use std::time::Duration;

use envmon_hal::Delay;

/// Delay that puts the calling thread to sleep
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxDelay;

impl Delay for LinuxDelay {
    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
