//! Built-in 8×8 bitmap font: printable ASCII plus the six German umlauts.
//!
//! Glyphs are one byte per row, top row first, and the **most significant bit
//! is the leftmost pixel** — the renderer tests column `c` of row `r` with
//! `row & (0x80 >> c)`. Shapes follow the classic IBM PC 8×8 set.

/// One glyph bitmap: 8 rows of 8 pixels, MSB = leftmost pixel.
pub type Glyph = [u8; 8];

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 8;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 8;

/// Internal code point the decoder emits for `Ä`.
pub const UPPER_A_UMLAUT: u8 = 128;
/// Internal code point the decoder emits for `Ö`.
pub const UPPER_O_UMLAUT: u8 = 129;
/// Internal code point the decoder emits for `Ü`.
pub const UPPER_U_UMLAUT: u8 = 130;
/// Internal code point the decoder emits for `ä`.
pub const LOWER_A_UMLAUT: u8 = 131;
/// Internal code point the decoder emits for `ö`.
pub const LOWER_O_UMLAUT: u8 = 132;
/// Internal code point the decoder emits for `ü`.
pub const LOWER_U_UMLAUT: u8 = 133;

/// Look up the glyph for an internal code point.
///
/// Printable ASCII (`32..=126`) lives at table slot `code - 32`; the umlaut
/// block ([`UPPER_A_UMLAUT`]`..=`[`LOWER_U_UMLAUT`], i.e. `128..=133`) at slot
/// `96 + (code - 128)`. Every other code — control bytes, DEL, and stray
/// high bytes that survive decoding — has no glyph and returns `None`; the
/// renderer leaves those columns blank.
#[must_use]
pub const fn glyph(code: u8) -> Option<&'static Glyph> {
    let slot = match code {
        32..=126 => (code - 32) as usize,
        128..=133 => 96 + (code - 128) as usize,
        _ => return None,
    };
    Some(&GLYPHS[slot])
}

// Slot 95 (after '~') is reserved filler so the umlaut block starts at 96,
// mirroring the classic header layout this table was lifted from.
const GLYPHS: [Glyph; 102] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' ' (0x20)
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // '!' (0x21)
    [0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"' (0x22)
    [0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00], // '#' (0x23)
    [0x30, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x30, 0x00], // '$' (0x24)
    [0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00], // '%' (0x25)
    [0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00], // '&' (0x26)
    [0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00], // ''' (0x27)
    [0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00], // '(' (0x28)
    [0x60, 0x30, 0x18, 0x18, 0x18, 0x30, 0x60, 0x00], // ')' (0x29)
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // '*' (0x2A)
    [0x00, 0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0x00], // '+' (0x2B)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x60], // ',' (0x2C)
    [0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00], // '-' (0x2D)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00], // '.' (0x2E)
    [0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00], // '/' (0x2F)
    [0x7C, 0xC6, 0xCE, 0xDE, 0xF6, 0xE6, 0x7C, 0x00], // '0' (0x30)
    [0x30, 0x70, 0x30, 0x30, 0x30, 0x30, 0xFC, 0x00], // '1' (0x31)
    [0x78, 0xCC, 0x0C, 0x38, 0x60, 0xCC, 0xFC, 0x00], // '2' (0x32)
    [0x78, 0xCC, 0x0C, 0x38, 0x0C, 0xCC, 0x78, 0x00], // '3' (0x33)
    [0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x1E, 0x00], // '4' (0x34)
    [0xFC, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00], // '5' (0x35)
    [0x38, 0x60, 0xC0, 0xF8, 0xCC, 0xCC, 0x78, 0x00], // '6' (0x36)
    [0xFC, 0xCC, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00], // '7' (0x37)
    [0x78, 0xCC, 0xCC, 0x78, 0xCC, 0xCC, 0x78, 0x00], // '8' (0x38)
    [0x78, 0xCC, 0xCC, 0x7C, 0x0C, 0x18, 0x70, 0x00], // '9' (0x39)
    [0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00], // ':' (0x3A)
    [0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x60], // ';' (0x3B)
    [0x18, 0x30, 0x60, 0xC0, 0x60, 0x30, 0x18, 0x00], // '<' (0x3C)
    [0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00], // '=' (0x3D)
    [0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00], // '>' (0x3E)
    [0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00], // '?' (0x3F)
    [0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x78, 0x00], // '@' (0x40)
    [0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00], // 'A' (0x41)
    [0xFC, 0x66, 0x66, 0x7C, 0x66, 0x66, 0xFC, 0x00], // 'B' (0x42)
    [0x3C, 0x66, 0xC0, 0xC0, 0xC0, 0x66, 0x3C, 0x00], // 'C' (0x43)
    [0xF8, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00], // 'D' (0x44)
    [0xFE, 0x62, 0x68, 0x78, 0x68, 0x62, 0xFE, 0x00], // 'E' (0x45)
    [0xFE, 0x62, 0x68, 0x78, 0x68, 0x60, 0xF0, 0x00], // 'F' (0x46)
    [0x3C, 0x66, 0xC0, 0xC0, 0xCE, 0x66, 0x3E, 0x00], // 'G' (0x47)
    [0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00], // 'H' (0x48)
    [0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00], // 'I' (0x49)
    [0x1E, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00], // 'J' (0x4A)
    [0xE6, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0xE6, 0x00], // 'K' (0x4B)
    [0xF0, 0x60, 0x60, 0x60, 0x62, 0x66, 0xFE, 0x00], // 'L' (0x4C)
    [0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00], // 'M' (0x4D)
    [0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00], // 'N' (0x4E)
    [0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00], // 'O' (0x4F)
    [0xFC, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00], // 'P' (0x50)
    [0x78, 0xCC, 0xCC, 0xCC, 0xDC, 0x78, 0x1C, 0x00], // 'Q' (0x51)
    [0xFC, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0xE6, 0x00], // 'R' (0x52)
    [0x78, 0xCC, 0xE0, 0x70, 0x1C, 0xCC, 0x78, 0x00], // 'S' (0x53)
    [0xFC, 0xB4, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00], // 'T' (0x54)
    [0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xFC, 0x00], // 'U' (0x55)
    [0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00], // 'V' (0x56)
    [0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00], // 'W' (0x57)
    [0xC6, 0xC6, 0x6C, 0x38, 0x38, 0x6C, 0xC6, 0x00], // 'X' (0x58)
    [0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x78, 0x00], // 'Y' (0x59)
    [0xFE, 0xC6, 0x8C, 0x18, 0x32, 0x66, 0xFE, 0x00], // 'Z' (0x5A)
    [0x78, 0x60, 0x60, 0x60, 0x60, 0x60, 0x78, 0x00], // '[' (0x5B)
    [0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00], // '\' (0x5C)
    [0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x78, 0x00], // ']' (0x5D)
    [0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00], // '^' (0x5E)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_' (0x5F)
    [0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // '`' (0x60)
    [0x00, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00], // 'a' (0x61)
    [0xE0, 0x60, 0x60, 0x7C, 0x66, 0x66, 0xDC, 0x00], // 'b' (0x62)
    [0x00, 0x00, 0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x00], // 'c' (0x63)
    [0x1C, 0x0C, 0x0C, 0x7C, 0xCC, 0xCC, 0x76, 0x00], // 'd' (0x64)
    [0x00, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00], // 'e' (0x65)
    [0x38, 0x6C, 0x60, 0xF0, 0x60, 0x60, 0xF0, 0x00], // 'f' (0x66)
    [0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8], // 'g' (0x67)
    [0xE0, 0x60, 0x6C, 0x76, 0x66, 0x66, 0xE6, 0x00], // 'h' (0x68)
    [0x30, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00], // 'i' (0x69)
    [0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78], // 'j' (0x6A)
    [0xE0, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0xE6, 0x00], // 'k' (0x6B)
    [0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00], // 'l' (0x6C)
    [0x00, 0x00, 0xCC, 0xFE, 0xFE, 0xD6, 0xC6, 0x00], // 'm' (0x6D)
    [0x00, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x00], // 'n' (0x6E)
    [0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00], // 'o' (0x6F)
    [0x00, 0x00, 0xDC, 0x66, 0x66, 0x7C, 0x60, 0xF0], // 'p' (0x70)
    [0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0x1E], // 'q' (0x71)
    [0x00, 0x00, 0xDC, 0x76, 0x66, 0x60, 0xF0, 0x00], // 'r' (0x72)
    [0x00, 0x00, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x00], // 's' (0x73)
    [0x10, 0x30, 0x7C, 0x30, 0x30, 0x34, 0x18, 0x00], // 't' (0x74)
    [0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00], // 'u' (0x75)
    [0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00], // 'v' (0x76)
    [0x00, 0x00, 0xC6, 0xD6, 0xFE, 0xFE, 0x6C, 0x00], // 'w' (0x77)
    [0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00], // 'x' (0x78)
    [0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8], // 'y' (0x79)
    [0x00, 0x00, 0xFC, 0x98, 0x30, 0x64, 0xFC, 0x00], // 'z' (0x7A)
    [0x1C, 0x30, 0x30, 0xE0, 0x30, 0x30, 0x1C, 0x00], // '{' (0x7B)
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // '|' (0x7C)
    [0xE0, 0x30, 0x30, 0x1C, 0x30, 0x30, 0xE0, 0x00], // '}' (0x7D)
    [0x76, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~' (0x7E)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // reserved (0x7F)
    [0xCC, 0x00, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00], // 'Ä' (128)
    [0xC6, 0x38, 0x6C, 0xC6, 0xC6, 0x6C, 0x38, 0x00], // 'Ö' (129)
    [0xCC, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00], // 'Ü' (130)
    [0xCC, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x7E, 0x00], // 'ä' (131)
    [0xCC, 0x00, 0x78, 0xCC, 0xCC, 0x78, 0x00, 0x00], // 'ö' (132)
    [0xCC, 0x00, 0xCC, 0xCC, 0xCC, 0x7E, 0x00, 0x00], // 'ü' (133)
];
