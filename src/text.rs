//! Text decoding for the marquee: UTF-8 umlauts to internal glyph codes.
//!
//! Marquee text arrives as UTF-8, but the glyph table is indexed by single
//! bytes. The decoder folds the six German umlauts — the only multi-byte
//! sequences the [font](crate::font) carries — into the internal code points
//! `128..=133` and leaves every other byte untouched, so plain ASCII passes
//! through unchanged and anything unmappable renders as `?` or a blank
//! column.

use heapless::Vec;

use crate::Result;
use crate::error::Error;
use crate::font;

/// Longest accepted input, in bytes. Decoded output never exceeds the input
/// length, so one bound covers both.
pub const MAX_TEXT: usize = 256;

/// Lead byte of the two-byte UTF-8 sequences for `ÄÖÜäöü`.
const UMLAUT_LEAD: u8 = 0xC3;

/// Decode marquee text into internal glyph code points.
///
/// Single forward pass. An [`UMLAUT_LEAD`] byte consumes its follower: the
/// six umlaut continuations map to the font's `128..=133` block and any other
/// follower becomes `b'?'`. A lead byte at the very end of the input has no
/// follower to consume and passes through unchanged. All other bytes pass
/// through as-is; codes without a glyph simply render blank.
///
/// Returns [`Error::TextTooLong`] when the decoded text will not fit in
/// [`MAX_TEXT`] bytes.
pub fn decode(bytes: &[u8]) -> Result<Vec<u8, MAX_TEXT>> {
    let mut decoded = Vec::new();
    let mut iter = bytes.iter().copied();
    while let Some(byte) = iter.next() {
        let code = if byte == UMLAUT_LEAD {
            match iter.next() {
                Some(0x84) => font::UPPER_A_UMLAUT,
                Some(0x96) => font::UPPER_O_UMLAUT,
                Some(0x9C) => font::UPPER_U_UMLAUT,
                Some(0xA4) => font::LOWER_A_UMLAUT,
                Some(0xB6) => font::LOWER_O_UMLAUT,
                Some(0xBC) => font::LOWER_U_UMLAUT,
                Some(_) => b'?',
                // Lead byte ends the input: emit it unchanged instead of
                // reading past the end.
                None => UMLAUT_LEAD,
            }
        } else {
            byte
        };
        decoded.push(code).map_err(|_| Error::TextTooLong {
            len: bytes.len(),
            capacity: MAX_TEXT,
        })?;
    }
    Ok(decoded)
}
