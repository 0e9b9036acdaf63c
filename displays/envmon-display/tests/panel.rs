//! Screen content tests against an emulated SSD1306
//!
//! The fake panel decodes the command stream the way the controller does
//! in page addressing mode and keeps a copy of display RAM, so tests can
//! read back what ended up on screen.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_io::Write;
use envmon_core::StatusDisplay;
use envmon_display::font::{self, Glyph, BLANK, FIRST_CHAR, GLYPH_SIZE, LAST_CHAR};
use envmon_display::icons;
use envmon_display::layout::{ICON_COLUMN, LABEL_COLUMN, VALUE_COLUMN};
use envmon_display::ssd1306::{PAGES, WIDTH};
use envmon_display::{PanelState, Ssd1306};
use envmon_hal::{Delay, OutputPin, SpiBus};
use envmon_protocol::DisplayEndpoint;
use proptest::prelude::*;

#[derive(Default)]
struct Panel {
    ram: Vec<[u8; WIDTH]>,
    data_mode: bool,
    page: usize,
    column: usize,
    pending_args: usize,
    on: bool,
    resets: usize,
    reset_low: bool,
}

impl Panel {
    fn new() -> Self {
        Self {
            ram: vec![[0xFF; WIDTH]; PAGES],
            ..Default::default()
        }
    }

    fn command(&mut self, byte: u8) {
        if self.pending_args > 0 {
            self.pending_args -= 1;
            return;
        }
        match byte {
            0xAE => self.on = false,
            0xAF => self.on = true,
            0x00..=0x0F => self.column = (self.column & 0xF0) | byte as usize,
            0x10..=0x1F => self.column = (self.column & 0x0F) | ((byte as usize & 0x0F) << 4),
            0xB0..=0xB7 => self.page = (byte & 0x07) as usize,
            0x20 | 0x81 | 0x8D | 0xA8 | 0xD3 | 0xD5 | 0xD9 | 0xDA | 0xDB => {
                self.pending_args = 1
            }
            _ => {}
        }
    }

    fn data(&mut self, byte: u8) {
        self.ram[self.page][self.column] = byte;
        // Page addressing: the column pointer wraps within the page
        self.column = (self.column + 1) % WIDTH;
    }

    fn cell(&self, page: usize, column: usize) -> Glyph {
        let mut cell = BLANK;
        cell.copy_from_slice(&self.ram[page][column..column + GLYPH_SIZE]);
        cell
    }

    /// Decode `len` cells starting at page/column back into text
    fn text_at(&self, page: usize, column: usize, len: usize) -> String {
        (0..len)
            .map(|i| {
                let cell = self.cell(page, column + i * GLYPH_SIZE);
                (FIRST_CHAR..=LAST_CHAR)
                    .find(|&code| *font::glyph(code) == cell)
                    .map_or('?', char::from)
            })
            .collect()
    }

    fn is_blank(&self) -> bool {
        self.ram.iter().all(|page| page.iter().all(|&b| b == 0))
    }
}

type Shared = Rc<RefCell<Panel>>;

struct Spi(Shared);
struct Dc(Shared);
struct Rst(Shared);
struct NoDelay;

impl SpiBus for Spi {
    type Error = ();
    fn write(&mut self, bytes: &[u8]) -> Result<(), ()> {
        let mut panel = self.0.borrow_mut();
        for &byte in bytes {
            if panel.data_mode {
                panel.data(byte);
            } else {
                panel.command(byte);
            }
        }
        Ok(())
    }
}

impl OutputPin for Dc {
    type Error = ();
    fn set_high(&mut self) -> Result<(), ()> {
        self.0.borrow_mut().data_mode = true;
        Ok(())
    }
    fn set_low(&mut self) -> Result<(), ()> {
        self.0.borrow_mut().data_mode = false;
        Ok(())
    }
}

impl OutputPin for Rst {
    type Error = ();
    fn set_high(&mut self) -> Result<(), ()> {
        let mut panel = self.0.borrow_mut();
        if panel.reset_low {
            panel.resets += 1;
        }
        panel.reset_low = false;
        Ok(())
    }
    fn set_low(&mut self) -> Result<(), ()> {
        self.0.borrow_mut().reset_low = true;
        Ok(())
    }
}

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

type Display = Ssd1306<Spi, Dc, Rst, NoDelay>;

fn attach() -> (Display, Shared) {
    let panel: Shared = Rc::new(RefCell::new(Panel::new()));
    let display = Ssd1306::attach(
        Spi(panel.clone()),
        Dc(panel.clone()),
        Rst(panel.clone()),
        NoDelay,
    )
    .unwrap();
    (display, panel)
}

#[test]
fn attach_shows_startup_banner() {
    let (display, panel) = attach();
    let panel = panel.borrow();

    assert_eq!(display.state(), PanelState::Active);
    assert_eq!(panel.resets, 1);
    assert!(panel.on);
    assert_eq!(panel.text_at(2, 32, 8), "~EnvMon~");
    assert_eq!(panel.text_at(4, 8, 14), "Sensor Monitor");
    assert_eq!(panel.text_at(5, 0, 16), "<Embedded Linux>");
}

#[test]
fn status_screen_layout() {
    let (mut display, panel) = attach();

    display.render_status("25.5", "60.2", "1250").unwrap();

    let panel = panel.borrow();
    assert_eq!(panel.cell(2, ICON_COLUMN as usize), icons::THERMOMETER);
    assert_eq!(panel.cell(4, ICON_COLUMN as usize), icons::DROPLET);
    assert_eq!(panel.cell(6, ICON_COLUMN as usize), icons::SUN);

    assert_eq!(panel.text_at(2, LABEL_COLUMN as usize, 5), "Temp:");
    assert_eq!(panel.text_at(4, LABEL_COLUMN as usize, 6), "Humid:");
    assert_eq!(panel.text_at(6, LABEL_COLUMN as usize, 6), "Light:");

    assert_eq!(panel.text_at(2, VALUE_COLUMN as usize, 5), "25.5C");
    assert_eq!(panel.text_at(4, VALUE_COLUMN as usize, 5), "60.2%");
    assert_eq!(panel.text_at(6, VALUE_COLUMN as usize, 6), "1250lx");

    // Banner from attach is gone
    assert!(panel.ram[5].iter().all(|&b| b == 0));
}

#[test]
fn empty_values_render_unit_only() {
    let (mut display, panel) = attach();

    display.render_status("", "", "").unwrap();

    let panel = panel.borrow();
    assert_eq!(panel.text_at(2, VALUE_COLUMN as usize, 2), "C ");
    assert_eq!(panel.text_at(6, VALUE_COLUMN as usize, 3), "lx ");
}

#[test]
fn long_value_is_clipped_at_right_edge() {
    let (mut display, panel) = attach();

    display.render_status("ERROR", "ERROR", "123456789").unwrap();

    let panel = panel.borrow();
    // (128 - 70) / 8 = 7 whole cells fit after the value column
    assert_eq!(panel.text_at(6, VALUE_COLUMN as usize, 7), "1234567");
    assert_eq!(panel.text_at(2, VALUE_COLUMN as usize, 6), "ERRORC");
    assert!(panel.ram[6][VALUE_COLUMN as usize + 7 * GLYPH_SIZE..]
        .iter()
        .all(|&b| b == 0));
}

#[test]
fn redraw_shows_latest_values_only() {
    let (mut display, panel) = attach();

    display.render_status("100.0", "99.9", "54612").unwrap();
    display.render_status("1.0", "2.0", "3").unwrap();

    let panel = panel.borrow();
    assert_eq!(panel.text_at(2, VALUE_COLUMN as usize, 5), "1.0C ");
    assert_eq!(panel.text_at(6, VALUE_COLUMN as usize, 4), "3lx ");
}

#[test]
fn endpoint_payload_reaches_the_screen() {
    let (display, panel) = attach();
    let mut endpoint = DisplayEndpoint::new(display);

    let payload = b"25.5-60.2-1250\n";
    assert_eq!(endpoint.write(payload).unwrap(), payload.len());

    let panel = panel.borrow();
    assert_eq!(panel.text_at(2, VALUE_COLUMN as usize, 5), "25.5C");
    assert_eq!(panel.text_at(4, VALUE_COLUMN as usize, 5), "60.2%");
    assert_eq!(panel.text_at(6, VALUE_COLUMN as usize, 6), "1250lx");
}

#[test]
fn detach_blanks_and_switches_off() {
    let (mut display, panel) = attach();
    display.render_status("25.5", "60.2", "1250").unwrap();

    let (_spi, _dc, _rst, _delay) = display.detach().unwrap();

    let panel = panel.borrow();
    assert!(panel.is_blank());
    assert!(!panel.on);
}

proptest! {
    #[test]
    fn text_never_writes_past_the_edge(
        page in 0u8..8,
        column in 0u8..128,
        text in "[ -~]{0,20}",
    ) {
        let (mut display, panel) = attach();
        display.clear().unwrap();

        let drawn = display.draw_text(page, column, &text).unwrap();

        let fits = (WIDTH - column as usize) / GLYPH_SIZE;
        prop_assert_eq!(drawn, text.len().min(fits));

        let panel = panel.borrow();
        let end = column as usize + drawn * GLYPH_SIZE;
        prop_assert!(panel.ram[page as usize][end..].iter().all(|&b| b == 0));
        for (other, ram) in panel.ram.iter().enumerate() {
            if other != page as usize {
                prop_assert!(ram.iter().all(|&b| b == 0));
            }
        }
    }

    #[test]
    fn glyph_lands_at_its_cell(page in 0u8..8, column in 0u8..=120, code in 32u8..127) {
        let (mut display, panel) = attach();
        display.clear().unwrap();

        display.draw_glyph(page, column, code).unwrap();

        let panel = panel.borrow();
        prop_assert_eq!(&panel.cell(page as usize, column as usize), font::glyph(code));
    }
}
