//! SSD1306 128×64 OLED over I²C.
//!
//! [`FrameBuffer`] is an embedded-graphics draw target in the panel's
//! native page-major layout; [`Ssd1306`] ships it to the controller;
//! [`TextDisplay`] is what the rest of the firmware talks to: a blank
//! screen with up to eight rows of 5×8 text.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;

use crate::error::DisplayError;
use crate::fsm::context::MAX_LINES;

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;
pub const SSD1306_ADDR: u8 = 0x3C;

const PAGES: usize = (DISPLAY_HEIGHT / 8) as usize;
const BUFFER_LEN: usize = DISPLAY_WIDTH as usize * PAGES;

/// Left margin of every text row.
const TEXT_X: i32 = 5;
/// Row pitch; one text row per controller page.
const ROW_HEIGHT: i32 = 8;

mod cmd {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SEG_REMAP: u8 = 0xA0;
    pub const CHARGE_PUMP: u8 = 0x8D;
}

const INIT_SEQUENCE: [u8; 25] = [
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    0x3F, // 64 rows
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::MEMORY_MODE,
    0x00, // horizontal addressing
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

// ───────────────────────────────────────────────────────────────
// Frame buffer
// ───────────────────────────────────────────────────────────────

/// One bit per pixel, byte `page * 128 + x`, bit `y % 8`.
pub struct FrameBuffer {
    buffer: [u8; BUFFER_LEN],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
        }
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return;
        }
        let idx = (y / 8 * DISPLAY_WIDTH + x) as usize;
        let bit = 1 << (y % 8);
        if on {
            self.buffer[idx] |= bit;
        } else {
            self.buffer[idx] &= !bit;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return false;
        }
        self.buffer[(y / 8 * DISPLAY_WIDTH + x) as usize] & (1 << (y % 8)) != 0
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.iter().all(|&b| b == 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                self.set_pixel(coord.x as u32, coord.y as u32, color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// Blocking SSD1306 controller on any embedded-hal I²C bus.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ssd1306<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: SSD1306_ADDR,
        }
    }

    pub fn init(&mut self) -> Result<(), DisplayError> {
        for &c in &INIT_SEQUENCE {
            self.command(c)?;
        }
        Ok(())
    }

    fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[0x00, c])
            .map_err(|_| DisplayError::Bus)
    }

    /// Push the whole frame: full column/page window, then 32-byte data
    /// bursts behind the 0x40 control byte.
    pub fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        for c in [cmd::COLUMN_ADDR, 0, (DISPLAY_WIDTH - 1) as u8] {
            self.command(c)?;
        }
        for c in [cmd::PAGE_ADDR, 0, (PAGES - 1) as u8] {
            self.command(c)?;
        }

        for chunk in frame.as_bytes().chunks(32) {
            let mut buf = [0u8; 33];
            buf[0] = 0x40;
            buf[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &buf[..=chunk.len()])
                .map_err(|_| DisplayError::Bus)?;
        }
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Text screen
// ───────────────────────────────────────────────────────────────

/// Line-oriented text screen: every render starts from a blank frame.
pub struct TextDisplay<I2C> {
    panel: Ssd1306<I2C>,
    frame: FrameBuffer,
}

impl<I2C: I2c> TextDisplay<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            panel: Ssd1306::new(i2c),
            frame: FrameBuffer::new(),
        }
    }

    /// Send the init sequence and push a blank frame.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init()?;
        self.clear()
    }

    /// Blank, draw `lines[i]` at row `i`, flush. Rows past the eighth
    /// are dropped.
    pub fn show(&mut self, lines: &[&str]) -> Result<(), DisplayError> {
        self.frame.clear();
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        for (row, line) in lines.iter().take(MAX_LINES).enumerate() {
            Text::with_baseline(
                line,
                Point::new(TEXT_X, row as i32 * ROW_HEIGHT),
                style,
                Baseline::Top,
            )
            .draw(&mut self.frame)
            .map_err(|_| DisplayError::Render)?;
        }
        self.panel.flush(&self.frame)
    }

    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame.clear();
        self.panel.flush(&self.frame)
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}
