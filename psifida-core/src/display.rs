//! Display facade: owns the framebuffer, glyph resolver and transport
//!
//! All drawing is purely local mutation of the framebuffer; nothing
//! reaches the panel until [`Display::update`] serializes the buffer
//! page by page. One `Display` per physical panel; the handle owns all
//! driver state, so independent displays (and tests) do not share
//! anything.

use crate::font::FontSize;
use crate::framebuffer::{Framebuffer, PAGES};
use crate::glyph::{GlyphIndexEntry, GlyphResolver, DEFAULT_CACHE_SLOTS};
use crate::text;
use crate::traits::{DisplayError, DisplayTransport, GlyphStore};
use core::fmt::Write;
use heapless::String;

/// Scratch capacity for formatted output
const FMT_CAPACITY: usize = 128;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const RESUME_RAM_CONTENT: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Initialization command sequence (sent as one batch)
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x30,
    cmd::RESUME_RAM_CONTENT,
    cmd::SET_NORMAL,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::DISPLAY_ON,
];

/// Driver handle for one 128x64 page-addressed panel
pub struct Display<T, S, const N: usize = DEFAULT_CACHE_SLOTS> {
    transport: T,
    frame: Framebuffer,
    glyphs: GlyphResolver<S, N>,
}

impl<T: DisplayTransport, S: GlyphStore, const N: usize> Display<T, S, N> {
    /// Create a driver over a transport and a glyph store
    ///
    /// `index` is the linear code-point index of the external glyph
    /// table, which starts at `glyph_base` inside the store.
    pub fn new(
        transport: T,
        store: S,
        index: &'static [GlyphIndexEntry],
        glyph_base: u32,
    ) -> Self {
        Self {
            transport,
            frame: Framebuffer::new(),
            glyphs: GlyphResolver::new(store, index, glyph_base),
        }
    }

    /// Send the controller initialization sequence and clear the buffer
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.transport.write_commands(INIT_SEQUENCE)?;
        self.frame.clear();
        Ok(())
    }

    /// Position the controller's write cursor
    fn set_cursor(&mut self, col: u8, page: u8) -> Result<(), DisplayError> {
        self.transport.write_commands(&[
            cmd::SET_LOW_COLUMN | (col & 0x0F),
            cmd::SET_HIGH_COLUMN | ((col & 0xF0) >> 4),
            cmd::SET_PAGE_ADDR | (page & 0x0F),
        ])
    }

    /// Flush the framebuffer to the panel, page by page
    pub fn update(&mut self) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            self.set_cursor(0, page as u8)?;
            self.transport.write_data(self.frame.page(page))?;
        }
        Ok(())
    }

    /// Set panel contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.transport
            .write_commands(&[cmd::SET_CONTRAST, contrast])
    }

    /// Turn the panel on or off (buffer contents are retained)
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let command = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.transport.write_commands(&[command])
    }

    /// Invert the panel in hardware, without touching the buffer
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let command = if inverted { cmd::SET_INVERSE } else { cmd::SET_NORMAL };
        self.transport.write_commands(&[command])
    }

    /// The framebuffer, for inspection
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// The framebuffer, for direct drawing
    pub fn frame_mut(&mut self) -> &mut Framebuffer {
        &mut self.frame
    }

    // --- Buffer operations -------------------------------------------

    /// Clear the whole buffer
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Clear a pixel rectangle
    pub fn clear_area(&mut self, col: i16, row: i16, width: u8, height: u8) {
        self.frame.clear_area(col, row, width, height);
    }

    /// Invert the whole buffer
    pub fn reverse(&mut self) {
        self.frame.reverse();
    }

    /// Invert a pixel rectangle
    pub fn reverse_area(&mut self, col: i16, row: i16, width: u8, height: u8) {
        self.frame.reverse_area(col, row, width, height);
    }

    // --- Text --------------------------------------------------------

    /// Draw one ASCII character
    pub fn show_char(&mut self, col: i16, row: i16, c: char, size: FontSize) {
        if c.is_ascii() {
            text::draw_ascii(&mut self.frame, col, row, c as u8, size);
        }
    }

    /// Draw one double-byte character from its UTF-8 bytes
    ///
    /// Unresolvable characters render the `??` placeholder.
    pub fn show_cjk_char(&mut self, col: i16, row: i16, utf8: &str) -> Result<(), DisplayError> {
        text::draw_cjk_char(&mut self.frame, &mut self.glyphs, col, row, utf8.as_bytes())
    }

    /// Draw a mixed ASCII/double-byte string with wrap and truncation
    pub fn show_string(
        &mut self,
        col: i16,
        row: i16,
        size: FontSize,
        string: &str,
    ) -> Result<(), DisplayError> {
        text::draw_str(&mut self.frame, &mut self.glyphs, col, row, size, string)
    }

    /// Draw an unsigned integer
    pub fn show_num(
        &mut self,
        col: i16,
        row: i16,
        num: u32,
        size: FontSize,
    ) -> Result<(), DisplayError> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        let _ = write!(buf, "{}", num);
        self.show_string(col, row, size, &buf)
    }

    /// Draw a signed integer
    pub fn show_signed_num(
        &mut self,
        col: i16,
        row: i16,
        num: i32,
        size: FontSize,
    ) -> Result<(), DisplayError> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        let _ = write!(buf, "{}", num);
        self.show_string(col, row, size, &buf)
    }

    /// Draw a number in `0x..` hexadecimal
    pub fn show_hex_num(
        &mut self,
        col: i16,
        row: i16,
        num: u32,
        size: FontSize,
    ) -> Result<(), DisplayError> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        let _ = write!(buf, "0x{:X}", num);
        self.show_string(col, row, size, &buf)
    }

    /// Draw the low `len` bits of a number as `0b..` binary
    pub fn show_bin_num(
        &mut self,
        col: i16,
        row: i16,
        num: u32,
        len: u8,
        size: FontSize,
    ) -> Result<(), DisplayError> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        let _ = buf.push_str("0b");
        for i in (0..len.min(32)).rev() {
            let bit = if (num & (1 << i)) != 0 { '1' } else { '0' };
            let _ = buf.push(bit);
        }
        self.show_string(col, row, size, &buf)
    }

    /// Draw a float with a fixed number of fraction digits
    pub fn show_float_num(
        &mut self,
        col: i16,
        row: i16,
        num: f64,
        frac_len: u8,
        size: FontSize,
    ) -> Result<(), DisplayError> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        let _ = write!(buf, "{:.*}", frac_len as usize, num);
        self.show_string(col, row, size, &buf)
    }

    /// Draw preformatted arguments, `format_args!`-style
    ///
    /// Output longer than the internal scratch buffer is truncated.
    pub fn show_fmt(
        &mut self,
        col: i16,
        row: i16,
        size: FontSize,
        args: core::fmt::Arguments<'_>,
    ) -> Result<(), DisplayError> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        let _ = buf.write_fmt(args);
        self.show_string(col, row, size, &buf)
    }

    /// Blit a column-major image
    pub fn show_image(
        &mut self,
        col: i16,
        row: i16,
        width: u8,
        height: u8,
        data: &[u8],
        clear_first: bool,
    ) {
        self.frame.draw_image(col, row, width, height, data, clear_first);
    }

    // --- Geometry ----------------------------------------------------

    /// Light a single pixel (in-range coordinates required)
    pub fn draw_point(&mut self, x: i16, y: i16) {
        self.frame.draw_point(x, y);
    }

    /// Read a single pixel (in-range coordinates required)
    pub fn get_point(&self, x: i16, y: i16) -> bool {
        self.frame.get_point(x, y)
    }

    /// Draw a line
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16) {
        self.frame.draw_line(x0, y0, x1, y1);
    }

    /// Draw a rectangle
    pub fn draw_rectangle(&mut self, x: i16, y: i16, width: u8, height: u8, filled: bool) {
        self.frame.draw_rectangle(x, y, width, height, filled);
    }

    /// Draw a triangle
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        filled: bool,
    ) {
        self.frame.draw_triangle(x0, y0, x1, y1, x2, y2, filled);
    }

    /// Draw a circle
    pub fn draw_circle(&mut self, cx: i16, cy: i16, r: u8, filled: bool) {
        self.frame.draw_circle(cx, cy, r, filled);
    }

    /// Draw an ellipse
    pub fn draw_ellipse(&mut self, cx: i16, cy: i16, a: u8, b: u8, filled: bool) {
        self.frame.draw_ellipse(cx, cy, a, b, filled);
    }

    /// Draw an arc or pie slice
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        cx: i16,
        cy: i16,
        r: u8,
        start_angle: i16,
        end_angle: i16,
        filled: bool,
    ) {
        self.frame.draw_arc(cx, cy, r, start_angle, end_angle, filled);
    }
}
