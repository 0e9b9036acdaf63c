//! EnvMon - Environment Monitor
//!
//! Userspace acquisition loop for embedded Linux boards. Polls a BH1750
//! light sensor and an SHT30 temperature/humidity sensor over I2C, shows
//! the values on an SSD1306 OLED over SPI, and appends every sample to a
//! daily data log.
//!
//! Usage: `envmon [CONFIG]` (defaults to `/etc/envmon.toml`). Log
//! verbosity follows `RUST_LOG`, default `info`.

use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};

use envmon_core::{ClimateSensor, LightSensor};
use envmon_display::ssd1306::DEFAULT_CONTRAST;
use envmon_display::Ssd1306;
use envmon_drivers::{Bh1750, Sht30};
use envmon_hal::SpiConfig;
use envmon_hal_linux::{LinuxDelay, LinuxI2c, LinuxPin, LinuxSpi};
use envmon_protocol::{ClimateEndpoint, DisplayEndpoint, LightEndpoint};

mod config;
mod datalog;
mod monitor;

use config::Config;
use datalog::{DailyLog, LocalClock};
use monitor::Monitor;

type Display = Ssd1306<LinuxSpi, LinuxPin, LinuxPin, LinuxDelay>;

/// Granularity at which the idle wait notices a shutdown request
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));
    let config = Config::load(&config_path)?;

    let datalog = DailyLog::open(&config.log.dir, config.log.retention_days, LocalClock)?;
    match datalog.prune() {
        Ok(0) => {}
        Ok(removed) => info!("Cleaned up {} old log file(s)", removed),
        Err(e) => warn!("Log cleanup failed: {:#}", e),
    }
    info!("Current log file: {}", datalog.current_path().display());
    info!("Log retention: {} days", config.log.retention_days);

    let light = attach_light(&config)?;
    let climate = attach_climate(&config)?;
    let display = attach_display(&config)?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("installing signal handler")?;
    }

    let mut monitor = Monitor::new(
        LightEndpoint::new(light),
        ClimateEndpoint::new(climate),
        DisplayEndpoint::new(display),
    );

    let interval = Duration::from_secs(config.monitor.interval_secs);
    info!("Starting sensor monitoring every {:?}", interval);

    while running.load(Ordering::SeqCst) {
        let started = Instant::now();

        let payload = monitor.cycle();
        if let Err(e) = datalog.append(&payload) {
            error!("Failed to log sensor data: {:#}", e);
        }
        println!("Data: {}", payload);

        wait_while_running(&running, interval.saturating_sub(started.elapsed()));
    }

    info!("Exiting");

    let (_light, _climate, display) = monitor.into_parts();
    if let Err(e) = display.into_inner().detach() {
        warn!("Display shutdown failed: {}", e);
    }

    Ok(())
}

/// Open the light sensor and take a first reading
fn attach_light(config: &Config) -> Result<Bh1750<LinuxI2c, LinuxDelay>> {
    let i2c = LinuxI2c::open(&config.bus.i2c)
        .with_context(|| format!("opening {}", config.bus.i2c.display()))?;
    let mut sensor = Bh1750::with_address(i2c, LinuxDelay, config.light.address);

    match sensor.read_lux() {
        Ok(lux) => info!("BH1750 first read: {} lux", lux),
        Err(e) => warn!("BH1750 initial read failed: {}", e),
    }

    Ok(sensor)
}

/// Open the temperature/humidity sensor and take a first reading
fn attach_climate(config: &Config) -> Result<Sht30<LinuxI2c, LinuxDelay>> {
    let i2c = LinuxI2c::open(&config.bus.i2c)
        .with_context(|| format!("opening {}", config.bus.i2c.display()))?;
    let mut sensor = Sht30::with_address(i2c, LinuxDelay, config.climate.address);

    match sensor.read_climate() {
        Ok(reading) => info!(
            "SHT30 first read: {} C, {} %RH",
            reading.temperature, reading.humidity
        ),
        Err(e) => warn!("SHT30 initial read failed: {}", e),
    }

    Ok(sensor)
}

/// Open the display's bus and control lines, then reset and initialize it
fn attach_display(config: &Config) -> Result<Display> {
    let spi_config = SpiConfig {
        frequency: config.bus.spi_hz,
        ..SpiConfig::default()
    };
    let spi = LinuxSpi::open(&config.bus.spi, spi_config)
        .with_context(|| format!("opening {}", config.bus.spi.display()))?;

    let chip = &config.bus.gpio_chip;
    let dc = LinuxPin::request(chip, config.display.dc_line, false, "envmon-dc")
        .with_context(|| format!("requesting D/C line {}", config.display.dc_line))?;
    let reset = LinuxPin::request(chip, config.display.reset_line, true, "envmon-reset")
        .with_context(|| format!("requesting reset line {}", config.display.reset_line))?;

    let mut display = Ssd1306::attach(spi, dc, reset, LinuxDelay)
        .map_err(|e| anyhow!("initializing SSD1306: {}", e))?;

    if config.display.contrast != DEFAULT_CONTRAST {
        display
            .set_contrast(config.display.contrast)
            .map_err(|e| anyhow!("setting contrast: {}", e))?;
    }

    info!("SSD1306 initialized on {}", config.bus.spi.display());
    Ok(display)
}

/// Sleep for up to `duration`, returning early once shutdown is requested
///
/// A duration past the clock's range waits until shutdown.
fn wait_while_running(running: &AtomicBool, duration: Duration) {
    let deadline = Instant::now().checked_add(duration);

    while running.load(Ordering::SeqCst) {
        let remaining = match deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => SHUTDOWN_POLL,
        };
        if remaining.is_zero() {
            break;
        }
        thread::sleep(SHUTDOWN_POLL.min(remaining));
    }
}
