//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays on 4-wire SPI.
//! There is no local frame buffer: every draw call addresses display RAM
//! directly and streams the bytes for one 8x8 cell.
//!
//! The controller distinguishes command bytes from data bytes with the
//! D/C line (low = command, high = data). The line is set before every
//! run of same-type bytes; one setting never spans two runs.

use envmon_core::{DisplayError, StatusDisplay};
use envmon_hal::{Delay, OutputPin, SpiBus};

use crate::font::{self, Glyph, GLYPH_SIZE};

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

/// Reset line hold time, both low and high phases
pub const RESET_PULSE_MS: u32 = 10;

/// Contrast written by the init sequence
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;

    /// Memory mode argument: page addressing
    pub const PAGE_ADDRESSING: u8 = 0x02;
}

/// Initialization sequence, sent as one command run after reset
pub const INIT_SEQUENCE: [u8; 25] = [
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    cmd::PAGE_ADDRESSING,
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    DEFAULT_CONTRAST,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// Meaning of the bytes in the next SPI run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DcMode {
    /// D/C low: controller commands
    Command,
    /// D/C high: display RAM contents
    Data,
}

impl DcMode {
    /// Level to drive on the D/C line
    pub const fn is_high(self) -> bool {
        matches!(self, DcMode::Data)
    }
}

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    /// Handles acquired, controller not configured
    Uninitialized,
    /// Reset and init sequence done, nothing drawn yet
    Initialized,
    /// At least one clear-and-draw cycle has run
    Active,
}

/// SSD1306 OLED driver
///
/// Owns the SPI device, the data/command line, the reset line and a
/// delay for the reset pulse.
pub struct Ssd1306<SPI, DC, RST, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: D,
    state: PanelState,
}

impl<SPI, DC, RST, D> Ssd1306<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    /// Create a new SSD1306 driver without touching the hardware
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: D) -> Self {
        Self {
            spi,
            dc,
            rst,
            delay,
            state: PanelState::Uninitialized,
        }
    }

    /// Create the driver, initialize the controller and show the
    /// start-up banner
    pub fn attach(spi: SPI, dc: DC, rst: RST, delay: D) -> Result<Self, DisplayError> {
        let mut display = Self::new(spi, dc, rst, delay);
        display.init()?;
        display.render_startup()?;
        Ok(display)
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Pulse the reset line and run the init sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.reset()?;
        self.send(DcMode::Command, &INIT_SEQUENCE)?;
        self.state = PanelState::Initialized;
        Ok(())
    }

    /// Hardware reset: hold RST low, then release and let it settle
    fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::ControlLine)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::ControlLine)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }

    /// Send one run of command or data bytes
    pub fn send(&mut self, mode: DcMode, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc
            .set_state(mode.is_high())
            .map_err(|_| DisplayError::ControlLine)?;
        self.spi
            .write(bytes)
            .map_err(|_| DisplayError::Communication)
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.state == PanelState::Uninitialized {
            return Err(DisplayError::NotInitialized);
        }
        Ok(())
    }

    /// Point the RAM write cursor at a page and column
    fn set_cursor(&mut self, page: u8, column: u8) -> Result<(), DisplayError> {
        self.send(
            DcMode::Command,
            &[
                cmd::SET_PAGE_ADDR | (page & 0x07),
                cmd::SET_LOW_COLUMN | (column & 0x0F),
                cmd::SET_HIGH_COLUMN | (column >> 4),
            ],
        )
    }

    /// Turn every pixel off
    ///
    /// Marks the start of a draw cycle and moves the driver to `Active`.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;

        let blank = [0u8; WIDTH];
        for page in 0..PAGES as u8 {
            self.set_cursor(page, 0)?;
            self.send(DcMode::Data, &blank)?;
        }

        self.state = PanelState::Active;
        Ok(())
    }

    /// Write one 8x8 bitmap at a page and column
    ///
    /// Cells that do not fit entirely on screen are skipped without error.
    fn draw_bitmap(&mut self, page: u8, column: u8, bitmap: &Glyph) -> Result<(), DisplayError> {
        self.ensure_initialized()?;

        if !cell_fits(page, column) {
            return Ok(());
        }

        self.set_cursor(page, column)?;
        self.send(DcMode::Data, bitmap)
    }

    /// Draw a character by code at a page and column
    ///
    /// Codes outside the printable ASCII range draw a blank cell.
    pub fn draw_glyph(&mut self, page: u8, column: u8, code: u8) -> Result<(), DisplayError> {
        self.draw_bitmap(page, column, font::glyph(code))
    }

    /// Draw an 8x8 icon at a page and column
    pub fn draw_icon(&mut self, page: u8, column: u8, icon: &Glyph) -> Result<(), DisplayError> {
        self.draw_bitmap(page, column, icon)
    }

    /// Draw text left to right from a page and column
    ///
    /// Advances 8 pixels per character and stops at the first character
    /// that would not fit before the right edge. Returns the number of
    /// characters drawn, which is zero for a page below the screen.
    pub fn draw_text(&mut self, page: u8, column: u8, text: &str) -> Result<usize, DisplayError> {
        self.ensure_initialized()?;

        if page as usize >= PAGES {
            return Ok(0);
        }

        let mut x = column as usize;
        let mut drawn = 0;

        for ch in text.chars() {
            if x + GLYPH_SIZE > WIDTH {
                break;
            }

            let code = if ch.is_ascii() { ch as u8 } else { 0 };
            self.draw_glyph(page, x as u8, code)?;

            x += GLYPH_SIZE;
            drawn += 1;
        }

        Ok(drawn)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.send(DcMode::Command, &[cmd::SET_CONTRAST, contrast])
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        let command = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.send(DcMode::Command, &[command])
    }

    /// Blank the panel and switch it off before detaching
    pub fn shutdown(&mut self) -> Result<(), DisplayError> {
        self.clear()?;
        self.set_display_on(false)
    }

    /// Release the bus, control lines and delay without touching the panel
    pub fn release(self) -> (SPI, DC, RST, D) {
        (self.spi, self.dc, self.rst, self.delay)
    }

    /// Shut the panel down and hand back the owned handles
    ///
    /// On failure the handles are dropped, which releases them as well.
    pub fn detach(mut self) -> Result<(SPI, DC, RST, D), DisplayError> {
        self.shutdown()?;
        Ok(self.release())
    }
}

/// Whether an 8x8 cell at `page`/`column` lies fully on screen
pub const fn cell_fits(page: u8, column: u8) -> bool {
    (page as usize) < PAGES && column as usize + GLYPH_SIZE <= WIDTH
}
