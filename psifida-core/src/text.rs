//! Mixed-encoding text decoding and layout
//!
//! Strings are treated as UTF-8 with a deliberately narrow decoder: a
//! leading byte >= 0xE0 starts exactly a three-byte sequence (the
//! U+0800..U+FFFF range the external glyph table covers); every other
//! leading byte is taken as a single-byte ASCII code.
//!
//! Known limitation: two- and four-byte UTF-8 sequences are not
//! recognized - their bytes pass through the single-byte path and render
//! as whatever printable tiles they happen to hit. The glyph store only
//! indexes 16-bit code points, so the narrow decoder is kept rather than
//! pretending at wider Unicode support.

use crate::font::{ascii_glyph, FontSize, CJK_HEIGHT, CJK_WIDTH};
use crate::framebuffer::{Framebuffer, PAGES, WIDTH};
use crate::glyph::GlyphResolver;
use crate::traits::{DisplayError, GlyphStore};

/// One decoded unit of the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// Single-byte ASCII/Latin code
    Single(u8),
    /// Code point decoded from a three-byte sequence; 0 when the
    /// sequence was malformed
    Wide(u16),
}

/// Decode the next unit from `bytes`, returning it with the number of
/// bytes consumed
///
/// `None` means end of input - either the slice is exhausted or a
/// three-byte lead arrives with fewer than three bytes left.
pub(crate) fn decode_next(bytes: &[u8]) -> Option<(Token, usize)> {
    let first = *bytes.first()?;
    if first >= 0xE0 {
        if bytes.len() < 3 {
            return None;
        }
        let code_point = ((first as u16 & 0x0F) << 12)
            | ((bytes[1] as u16 & 0x3F) << 6)
            | (bytes[2] as u16 & 0x3F);
        Some((Token::Wide(code_point), 3))
    } else {
        Some((Token::Single(first), 1))
    }
}

/// Draw one ASCII character tile at `(col, row)`
///
/// Bytes outside the printable table render nothing.
pub fn draw_ascii(frame: &mut Framebuffer, col: i16, row: i16, byte: u8, size: FontSize) {
    if let Some(tile) = ascii_glyph(byte, size) {
        frame.draw_image(col, row, size.width(), size.height(), tile, true);
    }
}

/// Draw the two-character placeholder used when a double-byte glyph
/// cannot be produced
pub fn draw_placeholder(frame: &mut Framebuffer, col: i16, row: i16) {
    draw_ascii(frame, col, row, b'?', FontSize::F8x16);
    draw_ascii(frame, col + 8, row, b'?', FontSize::F8x16);
}

/// Draw a single double-byte character from its UTF-8 bytes
///
/// A malformed or truncated sequence, or a code point missing from the
/// glyph index, renders the `??` placeholder instead. Only store failure
/// is an error.
pub fn draw_cjk_char<S: GlyphStore, const N: usize>(
    frame: &mut Framebuffer,
    glyphs: &mut GlyphResolver<S, N>,
    col: i16,
    row: i16,
    utf8: &[u8],
) -> Result<(), DisplayError> {
    let code_point = match decode_next(utf8) {
        Some((Token::Wide(cp), _)) if cp != 0 => cp,
        _ => {
            draw_placeholder(frame, col, row);
            return Ok(());
        }
    };

    match glyphs.resolve(code_point)? {
        Some(data) => frame.draw_image(col, row, CJK_WIDTH, CJK_HEIGHT, data, true),
        None => draw_placeholder(frame, col, row),
    }
    Ok(())
}

/// Lay out a mixed ASCII/double-byte string starting at `(col, row)`
///
/// The column cursor advances by the font width per ASCII tile and by
/// [`CJK_WIDTH`] per double-byte glyph. A glyph whose right edge would
/// leave the panel wraps to column 0 one line down; once the row passes
/// the last usable page the remaining text is dropped silently.
///
/// Double-byte glyphs only render in the 8x16 tier; in the 6x8 tier
/// their three bytes are consumed and skipped.
pub fn draw_str<S: GlyphStore, const N: usize>(
    frame: &mut Framebuffer,
    glyphs: &mut GlyphResolver<S, N>,
    mut col: i16,
    mut row: i16,
    size: FontSize,
    text: &str,
) -> Result<(), DisplayError> {
    let line_height = size.line_height() as i16;
    let mut bytes = text.as_bytes();

    while let Some((token, consumed)) = decode_next(bytes) {
        bytes = &bytes[consumed..];

        let advance = match token {
            Token::Wide(_) => {
                if size != FontSize::F8x16 {
                    continue;
                }
                CJK_WIDTH as i16
            }
            Token::Single(_) => size.width() as i16,
        };

        if col + advance > WIDTH as i16 {
            col = 0;
            row += line_height;
        }
        if row / 8 >= PAGES as i16 - 1 {
            break;
        }

        match token {
            Token::Wide(code_point) => match glyphs.resolve(code_point)? {
                Some(data) => frame.draw_image(col, row, CJK_WIDTH, CJK_HEIGHT, data, true),
                None => draw_placeholder(frame, col, row),
            },
            Token::Single(byte) => draw_ascii(frame, col, row, byte, size),
        }
        col += advance;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_8X16;
    use crate::glyph::GlyphIndexEntry;

    struct MockStore {
        reads: usize,
    }

    impl GlyphStore for MockStore {
        fn read(&mut self, _address: u32, buffer: &mut [u8]) -> Result<(), DisplayError> {
            self.reads += 1;
            buffer.fill(0xFF);
            Ok(())
        }
    }

    // "中" is 0xE4 0xB8 0xAD => U+4E2D
    static INDEX: [GlyphIndexEntry; 1] = [GlyphIndexEntry {
        code_point: 0x4E2D,
        offset: 0,
    }];

    fn fixture() -> (Framebuffer, GlyphResolver<MockStore, 4>) {
        (
            Framebuffer::new(),
            GlyphResolver::new(MockStore { reads: 0 }, &INDEX, 0),
        )
    }

    #[test]
    fn test_decode_ascii_and_three_byte() {
        assert_eq!(decode_next(b"A"), Some((Token::Single(b'A'), 1)));
        assert_eq!(
            decode_next("中".as_bytes()),
            Some((Token::Wide(0x4E2D), 3))
        );
        assert_eq!(decode_next(b""), None);
        // Truncated three-byte lead ends decoding
        assert_eq!(decode_next(&[0xE4, 0xB8]), None);
    }

    #[test]
    fn test_decode_two_byte_sequence_misparses_as_singles() {
        // The narrow decoder treats "é" (0xC3 0xA9) as two single bytes
        let bytes = "é".as_bytes();
        assert_eq!(decode_next(bytes), Some((Token::Single(0xC3), 1)));
        assert_eq!(decode_next(&bytes[1..]), Some((Token::Single(0xA9), 1)));
    }

    #[test]
    fn test_show_string_ab_matches_font_rows() {
        let (mut frame, mut glyphs) = fixture();
        draw_str(&mut frame, &mut glyphs, 0, 0, FontSize::F8x16, "AB").unwrap();

        let a = &FONT_8X16[(b'A' - b' ') as usize];
        let b = &FONT_8X16[(b'B' - b' ') as usize];
        for i in 0..8 {
            assert_eq!(frame.page(0)[i], a[i], "'A' top strip col {}", i);
            assert_eq!(frame.page(1)[i], a[i + 8], "'A' bottom strip col {}", i);
            assert_eq!(frame.page(0)[8 + i], b[i], "'B' top strip col {}", i);
            assert_eq!(frame.page(1)[8 + i], b[i + 8], "'B' bottom strip col {}", i);
        }
        // Nothing beyond column 16
        assert_eq!(frame.page(0)[16], 0);
    }

    #[test]
    fn test_unindexed_cjk_renders_two_question_marks() {
        let mut store = MockStore { reads: 0 };
        let mut frame = Framebuffer::new();
        let mut glyphs: GlyphResolver<_, 4> = GlyphResolver::new(&mut store, &INDEX, 0);
        // "文" (U+6587) is not in the index
        draw_str(&mut frame, &mut glyphs, 0, 0, FontSize::F8x16, "文").unwrap();
        drop(glyphs);

        let q = &FONT_8X16[(b'?' - b' ') as usize];
        for i in 0..8 {
            assert_eq!(frame.page(0)[i], q[i], "first '?' col {}", i);
            assert_eq!(frame.page(0)[8 + i], q[i], "second '?' col {}", i);
        }
        assert_eq!(store.reads, 0);
    }

    #[test]
    fn test_indexed_cjk_draws_glyph() {
        let mut store = MockStore { reads: 0 };
        let mut frame = Framebuffer::new();
        let mut glyphs: GlyphResolver<_, 4> = GlyphResolver::new(&mut store, &INDEX, 0);
        draw_str(&mut frame, &mut glyphs, 0, 16, FontSize::F8x16, "中").unwrap();
        drop(glyphs);

        // Mock store fills the glyph solid: 16 solid columns, rows 16..=31
        for x in 0..16 {
            assert!(frame.get_point(x, 16));
            assert!(frame.get_point(x, 31));
        }
        assert!(!frame.get_point(16, 16));
        assert_eq!(store.reads, 1);
    }

    #[test]
    fn test_cjk_skipped_in_small_tier() {
        let mut store = MockStore { reads: 0 };
        let mut frame = Framebuffer::new();
        let mut glyphs: GlyphResolver<_, 4> = GlyphResolver::new(&mut store, &INDEX, 0);
        draw_str(&mut frame, &mut glyphs, 0, 0, FontSize::F6x8, "中A").unwrap();
        drop(glyphs);

        // The CJK glyph is consumed without drawing or advancing; 'A'
        // lands at column 0
        assert_eq!(store.reads, 0);
        assert!(frame.page(0)[..6]
            .iter()
            .zip(&crate::font::FONT_6X8[(b'A' - b' ') as usize][..])
            .all(|(got, want)| got == want));
    }

    #[test]
    fn test_wrap_advances_one_line_per_overflow() {
        let (mut frame, mut glyphs) = fixture();
        // 17 8-pixel chars = 136 px: the 17th wraps to (0, 16)
        let text = "ABCDEFGHIJKLMNOPQ";
        draw_str(&mut frame, &mut glyphs, 0, 0, FontSize::F8x16, text).unwrap();

        let q = &FONT_8X16[(b'Q' - b' ') as usize];
        for i in 0..8 {
            assert_eq!(frame.page(2)[i], q[i], "wrapped 'Q' col {}", i);
        }
        // Row 0 still holds 16 characters
        assert_eq!(frame.page(0)[127], FONT_8X16[(b'P' - b' ') as usize][7]);
    }

    #[test]
    fn test_layout_stops_at_last_usable_page() {
        let (mut frame, mut glyphs) = fixture();
        // Start on the last page: nothing may be drawn
        draw_str(&mut frame, &mut glyphs, 0, 56, FontSize::F6x8, "XYZ").unwrap();
        let empty = Framebuffer::new();
        assert!(frame == empty);
    }

    #[test]
    fn test_overflowing_text_is_truncated_not_wrapped_forever() {
        let (mut frame, mut glyphs) = fixture();
        // 21 6-pixel chars fit per line; 8 lines' worth of input, but a
        // line starting on the last page is dropped
        let mut text = heapless::String::<256>::new();
        for _ in 0..(21 * 8) {
            text.push('H').unwrap();
        }
        draw_str(&mut frame, &mut glyphs, 0, 0, FontSize::F6x8, &text).unwrap();

        // Lines start at rows 0, 8, ..., 48; the wrap to row 56 stops
        // layout and the last page stays dark
        assert!(frame.get_point(0, 0));
        assert!(frame.get_point(0, 48));
        for y in 56..64 {
            for x in 0..WIDTH as i16 {
                assert!(!frame.get_point(x, y), "unexpected ink at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_draw_cjk_char_placeholder_on_malformed() {
        let (mut frame, mut glyphs) = fixture();
        // Leading byte below 0xE0 cannot start a double-byte sequence
        draw_cjk_char(&mut frame, &mut glyphs, 0, 0, b"A..").unwrap();

        let q = &FONT_8X16[(b'?' - b' ') as usize];
        for i in 0..8 {
            assert_eq!(frame.page(0)[i], q[i]);
            assert_eq!(frame.page(0)[8 + i], q[i]);
        }
    }

    #[test]
    fn test_draw_ascii_ignores_unprintable() {
        let mut frame = Framebuffer::new();
        draw_ascii(&mut frame, 0, 0, 0x07, FontSize::F6x8);
        let empty = Framebuffer::new();
        assert!(frame == empty);
    }

    #[test]
    fn test_placeholder_occupies_sixteen_columns() {
        let (mut frame, mut glyphs) = fixture();
        draw_str(&mut frame, &mut glyphs, 0, 0, FontSize::F8x16, "文A").unwrap();

        // 'A' starts at column 16, right after the two '?' tiles
        let a = &FONT_8X16[(b'A' - b' ') as usize];
        for i in 0..8 {
            assert_eq!(frame.page(0)[16 + i], a[i], "'A' col {}", i);
        }
    }
}
