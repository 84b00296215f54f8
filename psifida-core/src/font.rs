//! Built-in single-byte font tiers and glyph geometry
//!
//! Two column-major ASCII tables covering the 95 printable characters,
//! plus the fixed geometry of the externally stored double-byte glyphs.
//! In every glyph byte, bit 0 is the topmost pixel of the column; the
//! 8x16 tier stores the top 8-row strip first, then the bottom strip.
//!
//! The 8x16 tier is the 8-pixel base design scaled by vertical pixel
//! doubling, precomputed into the table.

/// Width of a double-byte (CJK) glyph in pixels
pub const CJK_WIDTH: u8 = 16;
/// Height of a double-byte (CJK) glyph in pixels
pub const CJK_HEIGHT: u8 = 16;
/// Bytes per double-byte glyph in the external store (16 columns x 2 strips)
pub const CJK_GLYPH_BYTES: usize = 32;

/// First printable character covered by the built-in tables
const FIRST_PRINTABLE: u8 = b' ';
/// One past the last printable character
const LAST_PRINTABLE: u8 = b'~';

/// The two built-in ASCII font tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 6x8 pixels per character
    F6x8,
    /// 8x16 pixels per character
    F8x16,
}

impl FontSize {
    /// Horizontal advance per ASCII character, in pixels
    pub const fn width(self) -> u8 {
        match self {
            FontSize::F6x8 => 6,
            FontSize::F8x16 => 8,
        }
    }

    /// Character cell height in pixels
    pub const fn height(self) -> u8 {
        match self {
            FontSize::F6x8 => 8,
            FontSize::F8x16 => 16,
        }
    }

    /// Row advance when text wraps
    ///
    /// Lines carrying double-byte glyphs always use the 16-pixel tier, so
    /// the line height equals the cell height of the tier in use.
    pub const fn line_height(self) -> u8 {
        self.height()
    }
}

/// Look up the bitmap for a printable ASCII byte
///
/// Returns `None` for bytes outside `' '..='~'`; control bytes and the
/// 0x80..0xDF range (which the text decoder passes through as single
/// bytes) have no tile and are simply not rendered.
pub fn ascii_glyph(byte: u8, size: FontSize) -> Option<&'static [u8]> {
    if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&byte) {
        return None;
    }
    let index = (byte - FIRST_PRINTABLE) as usize;
    Some(match size {
        FontSize::F6x8 => &FONT_6X8[index][..],
        FontSize::F8x16 => &FONT_8X16[index][..],
    })
}

/// 6x8 tier: 5 data columns plus one blank spacing column per character
#[rustfmt::skip]
pub static FONT_6X8: [[u8; 6]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14, 0x00], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12, 0x00], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62, 0x00], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50, 0x00], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02, 0x00], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46, 0x00], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31, 0x00], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x00], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39, 0x00], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03, 0x00], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36, 0x00], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E, 0x00], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x00], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08, 0x00], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06, 0x00], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E, 0x00], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36, 0x00], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41, 0x00], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01, 0x00], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01, 0x00], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41, 0x00], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40, 0x00], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06, 0x00], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46, 0x00], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31, 0x00], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01, 0x00], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63, 0x00], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07, 0x00], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43, 0x00], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04, 0x00], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78, 0x00], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38, 0x00], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20, 0x00], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F, 0x00], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18, 0x00], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02, 0x00], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E, 0x00], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78, 0x00], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78, 0x00], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78, 0x00], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08, 0x00], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C, 0x00], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08, 0x00], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20, 0x00], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20, 0x00], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C, 0x00], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C, 0x00], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44, 0x00], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00, 0x00], // '}'
    [0x08, 0x04, 0x08, 0x10, 0x08, 0x00], // '~'
];

/// 8x16 tier: 8 columns, top strip then bottom strip
#[rustfmt::skip]
pub static FONT_8X16: [[u8; 16]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x67, 0x00, 0x00, 0x00, 0x00], // '!'
    [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x00, 0x60, 0xFE, 0x60, 0xFE, 0x60, 0x00, 0x00, 0x00, 0x06, 0x7F, 0x06, 0x7F, 0x06, 0x00, 0x00], // '#'
    [0x00, 0x60, 0x98, 0xFE, 0x98, 0x18, 0x00, 0x00, 0x00, 0x18, 0x19, 0x7F, 0x19, 0x06, 0x00, 0x00], // '$'
    [0x00, 0x1E, 0x1E, 0x80, 0x60, 0x18, 0x00, 0x00, 0x00, 0x18, 0x06, 0x01, 0x78, 0x78, 0x00, 0x00], // '%'
    [0x00, 0x78, 0x86, 0x66, 0x18, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x66, 0x18, 0x66, 0x00, 0x00], // '&'
    [0x00, 0x00, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x00, 0x00, 0xE0, 0x18, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x00, 0x00, 0x00], // '('
    [0x00, 0x00, 0x06, 0x18, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x18, 0x07, 0x00, 0x00, 0x00], // ')'
    [0x00, 0x60, 0x80, 0xF8, 0x80, 0x60, 0x00, 0x00, 0x00, 0x06, 0x01, 0x1F, 0x01, 0x06, 0x00, 0x00], // '*'
    [0x00, 0x80, 0x80, 0xF8, 0x80, 0x80, 0x00, 0x00, 0x00, 0x01, 0x01, 0x1F, 0x01, 0x01, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00], // ','
    [0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00], // '.'
    [0x00, 0x00, 0x00, 0x80, 0x60, 0x18, 0x00, 0x00, 0x00, 0x18, 0x06, 0x01, 0x00, 0x00, 0x00, 0x00], // '/'
    [0x00, 0xF8, 0x06, 0x86, 0x66, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x66, 0x61, 0x60, 0x1F, 0x00, 0x00], // '0'
    [0x00, 0x00, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00], // '1'
    [0x00, 0x18, 0x06, 0x06, 0x86, 0x78, 0x00, 0x00, 0x00, 0x60, 0x78, 0x66, 0x61, 0x60, 0x00, 0x00], // '2'
    [0x00, 0x06, 0x06, 0x66, 0x9E, 0x06, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x61, 0x1E, 0x00, 0x00], // '3'
    [0x00, 0x80, 0x60, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x07, 0x06, 0x06, 0x7F, 0x06, 0x00, 0x00], // '4'
    [0x00, 0x7E, 0x66, 0x66, 0x66, 0x86, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00], // '5'
    [0x00, 0xE0, 0x98, 0x86, 0x86, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00], // '6'
    [0x00, 0x06, 0x06, 0x86, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x01, 0x00, 0x00, 0x00, 0x00], // '7'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00], // '8'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x61, 0x61, 0x19, 0x07, 0x00, 0x00], // '9'
    [0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00], // ';'
    [0x00, 0x80, 0x60, 0x18, 0x06, 0x00, 0x00, 0x00, 0x00, 0x01, 0x06, 0x18, 0x60, 0x00, 0x00, 0x00], // '<'
    [0x00, 0x60, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x06, 0x06, 0x06, 0x06, 0x06, 0x00, 0x00], // '='
    [0x00, 0x00, 0x06, 0x18, 0x60, 0x80, 0x00, 0x00, 0x00, 0x00, 0x60, 0x18, 0x06, 0x01, 0x00, 0x00], // '>'
    [0x00, 0x18, 0x06, 0x06, 0x86, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x01, 0x00, 0x00, 0x00], // '?'
    [0x00, 0x18, 0x86, 0x86, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x7F, 0x60, 0x1F, 0x00, 0x00], // '@'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x7F, 0x06, 0x06, 0x06, 0x7F, 0x00, 0x00], // 'A'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00], // 'B'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0x18, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x18, 0x00, 0x00], // 'C'
    [0x00, 0xFE, 0x06, 0x06, 0x18, 0xE0, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x18, 0x07, 0x00, 0x00], // 'D'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x61, 0x61, 0x60, 0x00, 0x00], // 'E'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00], // 'F'
    [0x00, 0xF8, 0x06, 0x86, 0x86, 0x98, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x61, 0x61, 0x7F, 0x00, 0x00], // 'G'
    [0x00, 0xFE, 0x80, 0x80, 0x80, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x7F, 0x00, 0x00], // 'H'
    [0x00, 0x00, 0x06, 0xFE, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00], // 'I'
    [0x00, 0x00, 0x00, 0x06, 0xFE, 0x06, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x1F, 0x00, 0x00, 0x00], // 'J'
    [0x00, 0xFE, 0x80, 0x60, 0x18, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x06, 0x18, 0x60, 0x00, 0x00], // 'K'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00], // 'L'
    [0x00, 0xFE, 0x18, 0xE0, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0x00, 0x7F, 0x00, 0x00], // 'M'
    [0x00, 0xFE, 0x60, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0x06, 0x7F, 0x00, 0x00], // 'N'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00], // 'O'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00], // 'P'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x66, 0x18, 0x67, 0x00, 0x00], // 'Q'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x07, 0x19, 0x60, 0x00, 0x00], // 'R'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x60, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00], // 'S'
    [0x00, 0x06, 0x06, 0xFE, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00], // 'T'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00], // 'U'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x18, 0x07, 0x00, 0x00], // 'V'
    [0x00, 0xFE, 0x00, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x1F, 0x60, 0x1F, 0x00, 0x00], // 'W'
    [0x00, 0x1E, 0x60, 0x80, 0x60, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x06, 0x01, 0x06, 0x78, 0x00, 0x00], // 'X'
    [0x00, 0x7E, 0x80, 0x00, 0x80, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x01, 0x7E, 0x01, 0x00, 0x00, 0x00], // 'Y'
    [0x00, 0x06, 0x06, 0x86, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x66, 0x61, 0x60, 0x60, 0x00, 0x00], // 'Z'
    [0x00, 0x00, 0xFE, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x00, 0x00, 0x00], // '['
    [0x00, 0x18, 0x60, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x06, 0x18, 0x00, 0x00], // '\\'
    [0x00, 0x00, 0x06, 0x06, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x7F, 0x00, 0x00, 0x00], // ']'
    [0x00, 0x60, 0x18, 0x06, 0x18, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00], // '_'
    [0x00, 0x00, 0x06, 0x18, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x18, 0x66, 0x66, 0x66, 0x7F, 0x00, 0x00], // 'a'
    [0x00, 0xFE, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x60, 0x60, 0x1F, 0x00, 0x00], // 'b'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x18, 0x00, 0x00], // 'c'
    [0x00, 0x80, 0x60, 0x60, 0x80, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x61, 0x7F, 0x00, 0x00], // 'd'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x1F, 0x66, 0x66, 0x66, 0x07, 0x00, 0x00], // 'e'
    [0x00, 0x80, 0xF8, 0x86, 0x06, 0x18, 0x00, 0x00, 0x00, 0x01, 0x7F, 0x01, 0x00, 0x00, 0x00, 0x00], // 'f'
    [0x00, 0xE0, 0x18, 0x18, 0x18, 0xF8, 0x00, 0x00, 0x00, 0x01, 0x66, 0x66, 0x66, 0x1F, 0x00, 0x00], // 'g'
    [0x00, 0xFE, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x7F, 0x00, 0x00], // 'h'
    [0x00, 0x00, 0x60, 0xE6, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00], // 'i'
    [0x00, 0x00, 0x00, 0x60, 0xE6, 0x00, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x1F, 0x00, 0x00, 0x00], // 'j'
    [0x00, 0xFE, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x06, 0x19, 0x60, 0x00, 0x00, 0x00], // 'k'
    [0x00, 0x00, 0x06, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00], // 'l'
    [0x00, 0xE0, 0x60, 0x80, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x07, 0x00, 0x7F, 0x00, 0x00], // 'm'
    [0x00, 0xE0, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x7F, 0x00, 0x00], // 'n'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00], // 'o'
    [0x00, 0xE0, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x06, 0x06, 0x06, 0x01, 0x00, 0x00], // 'p'
    [0x00, 0x80, 0x60, 0x60, 0x80, 0xE0, 0x00, 0x00, 0x00, 0x01, 0x06, 0x06, 0x07, 0x7F, 0x00, 0x00], // 'q'
    [0x00, 0xE0, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00], // 'r'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0x61, 0x66, 0x66, 0x66, 0x18, 0x00, 0x00], // 's'
    [0x00, 0x60, 0xFE, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x18, 0x00, 0x00], // 't'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x18, 0x7F, 0x00, 0x00], // 'u'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x18, 0x07, 0x00, 0x00], // 'v'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x1E, 0x60, 0x1F, 0x00, 0x00], // 'w'
    [0x00, 0x60, 0x80, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x60, 0x19, 0x06, 0x19, 0x60, 0x00, 0x00], // 'x'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x01, 0x66, 0x66, 0x66, 0x1F, 0x00, 0x00], // 'y'
    [0x00, 0x60, 0x60, 0x60, 0xE0, 0x60, 0x00, 0x00, 0x00, 0x60, 0x78, 0x66, 0x61, 0x60, 0x00, 0x00], // 'z'
    [0x00, 0x00, 0x80, 0x78, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x1E, 0x60, 0x00, 0x00, 0x00], // '{'
    [0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00], // '|'
    [0x00, 0x00, 0x06, 0x78, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x1E, 0x01, 0x00, 0x00, 0x00], // '}'
    [0x00, 0x80, 0x60, 0x80, 0x00, 0x80, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x06, 0x01, 0x00, 0x00], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_range() {
        assert!(ascii_glyph(b' ', FontSize::F6x8).is_some());
        assert!(ascii_glyph(b'~', FontSize::F8x16).is_some());
        assert!(ascii_glyph(0x1F, FontSize::F6x8).is_none());
        assert!(ascii_glyph(0x7F, FontSize::F6x8).is_none());
        assert!(ascii_glyph(0xE0, FontSize::F8x16).is_none());
    }

    #[test]
    fn test_glyph_lengths_match_tier() {
        assert_eq!(ascii_glyph(b'A', FontSize::F6x8).unwrap().len(), 6);
        assert_eq!(ascii_glyph(b'A', FontSize::F8x16).unwrap().len(), 16);
    }

    #[test]
    fn test_space_is_blank() {
        assert!(ascii_glyph(b' ', FontSize::F6x8)
            .unwrap()
            .iter()
            .all(|&b| b == 0));
        assert!(ascii_glyph(b' ', FontSize::F8x16)
            .unwrap()
            .iter()
            .all(|&b| b == 0));
    }

    #[test]
    fn test_tiers_agree_on_ink() {
        // A column carrying ink in the base tier carries ink in the
        // doubled tier as well ('!' has its bar in one column)
        let small = ascii_glyph(b'!', FontSize::F6x8).unwrap();
        let large = ascii_glyph(b'!', FontSize::F8x16).unwrap();
        assert!(small.iter().any(|&b| b != 0));
        assert!(large.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_line_heights() {
        assert_eq!(FontSize::F6x8.line_height(), 8);
        assert_eq!(FontSize::F8x16.line_height(), 16);
    }
}
