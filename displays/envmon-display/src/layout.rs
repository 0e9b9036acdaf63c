//! Screen layouts
//!
//! The status screen has three rows on pages 2, 4 and 6:
//!
//! ```text
//! col 1    col 16   col 70
//! [icon]   Temp:    25.5C
//! [icon]   Humid:   60.2%
//! [icon]   Light:   1250lx
//! ```

use envmon_core::{DisplayError, StatusDisplay};
use envmon_hal::{Delay, OutputPin, SpiBus};
use heapless::String;

use crate::font::{Glyph, GLYPH_SIZE};
use crate::icons;
use crate::ssd1306::{Ssd1306, WIDTH};

/// Column of the row icons
pub const ICON_COLUMN: u8 = 1;

/// Column of the row labels
pub const LABEL_COLUMN: u8 = 16;

/// Column of the value text
pub const VALUE_COLUMN: u8 = 70;

/// Capacity for value plus unit; anything longer is clipped on screen anyway
const VALUE_CAPACITY: usize = 16;

/// One line of the status screen
#[derive(Debug, Clone, Copy)]
pub struct StatusRow {
    pub page: u8,
    pub icon: Glyph,
    pub label: &'static str,
    pub unit: &'static str,
}

/// Temperature, humidity and light rows, top to bottom
pub const STATUS_ROWS: [StatusRow; 3] = [
    StatusRow {
        page: 2,
        icon: icons::THERMOMETER,
        label: "Temp:",
        unit: "C",
    },
    StatusRow {
        page: 4,
        icon: icons::DROPLET,
        label: "Humid:",
        unit: "%",
    },
    StatusRow {
        page: 6,
        icon: icons::SUN,
        label: "Light:",
        unit: "lx",
    },
];

/// Start-up banner lines as (page, text)
pub const BANNER: [(u8, &str); 3] = [
    (2, "~EnvMon~"),
    (4, "Sensor Monitor"),
    (5, "<Embedded Linux>"),
];

/// Column that centers `text` horizontally
///
/// Text wider than the panel starts at column 0.
pub fn centered_column(text: &str) -> u8 {
    let width = text.chars().count().saturating_mul(GLYPH_SIZE);
    (WIDTH.saturating_sub(width) / 2) as u8
}

/// Value followed by its unit, cut off at the buffer capacity
fn with_unit(value: &str, unit: &str) -> String<VALUE_CAPACITY> {
    let mut text = String::new();
    for ch in value.chars().chain(unit.chars()) {
        if text.push(ch).is_err() {
            break;
        }
    }
    text
}

impl<SPI, DC, RST, D> StatusDisplay for Ssd1306<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    fn render_status(
        &mut self,
        temperature: &str,
        humidity: &str,
        light: &str,
    ) -> Result<(), DisplayError> {
        self.clear()?;

        for (row, value) in STATUS_ROWS.iter().zip([temperature, humidity, light]) {
            self.draw_icon(row.page, ICON_COLUMN, &row.icon)?;
            self.draw_text(row.page, LABEL_COLUMN, row.label)?;
            self.draw_text(row.page, VALUE_COLUMN, &with_unit(value, row.unit))?;
        }

        Ok(())
    }

    fn render_startup(&mut self) -> Result<(), DisplayError> {
        self.clear()?;

        for (page, text) in BANNER {
            self.draw_text(page, centered_column(text), text)?;
        }

        Ok(())
    }
}
