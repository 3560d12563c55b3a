#![allow(missing_docs)]
//! Host-level tests for marquee text decoding.

use led_marquee::{Error, font, text};

#[test]
fn plain_ascii_passes_through_unchanged() {
    let decoded = text::decode(b"HELLO world 123!").unwrap();
    assert_eq!(decoded.as_slice(), b"HELLO world 123!".as_slice());
}

#[test]
fn empty_input_decodes_to_empty() {
    let decoded = text::decode(b"").unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn all_six_umlauts_fold_to_glyph_codes() {
    let decoded = text::decode("ÄÖÜäöü".as_bytes()).unwrap();
    assert_eq!(
        decoded.as_slice(),
        &[
            font::UPPER_A_UMLAUT,
            font::UPPER_O_UMLAUT,
            font::UPPER_U_UMLAUT,
            font::LOWER_A_UMLAUT,
            font::LOWER_O_UMLAUT,
            font::LOWER_U_UMLAUT,
        ][..]
    );
}

/// An accent outside the umlaut block shares the umlauts' lead byte, so it
/// consumes the pair and degrades to `?`.
#[test]
fn unmapped_two_byte_sequence_becomes_question_mark() {
    let decoded = text::decode("café".as_bytes()).unwrap();
    assert_eq!(decoded.as_slice(), b"caf?".as_slice());
}

#[test]
fn eszett_degrades_but_umlauts_survive() {
    let decoded = text::decode("Grüße".as_bytes()).unwrap();
    assert_eq!(
        decoded.as_slice(),
        &[b'G', b'r', font::LOWER_U_UMLAUT, b'?', b'e'][..]
    );
}

/// A lead byte with nothing after it has no follower to consume; it passes
/// through and simply renders blank.
#[test]
fn trailing_lead_byte_passes_through() {
    let decoded = text::decode(&[b'A', 0xC3]).unwrap();
    assert_eq!(decoded.as_slice(), &[b'A', 0xC3][..]);
}

/// Sequences with other lead bytes are not decoded; their raw bytes flow
/// through one by one and render as blanks or table glyphs.
#[test]
fn three_byte_sequences_pass_through_raw() {
    let decoded = text::decode("€".as_bytes()).unwrap();
    assert_eq!(decoded.as_slice(), &[0xE2, 0x82, 0xAC][..]);
}

#[test]
fn input_at_capacity_is_accepted() {
    let decoded = text::decode(&[b'x'; text::MAX_TEXT]).unwrap();
    assert_eq!(decoded.len(), text::MAX_TEXT);
}

#[test]
fn oversized_input_is_rejected() {
    let err = text::decode(&[b'x'; text::MAX_TEXT + 1]).unwrap_err();
    assert!(matches!(
        err,
        Error::TextTooLong {
            len: 257,
            capacity: text::MAX_TEXT,
        }
    ));
    assert_eq!(
        format!("{err}"),
        "text of 257 bytes exceeds the 256-byte decode buffer"
    );
}

/// Umlauts shrink two input bytes to one decoded code, so input longer than
/// the buffer can still fit once decoded.
#[test]
fn capacity_is_checked_after_decoding() {
    let mut input = Vec::new();
    for _ in 0..text::MAX_TEXT {
        input.extend_from_slice("ü".as_bytes());
    }
    assert_eq!(input.len(), 2 * text::MAX_TEXT);
    let decoded = text::decode(&input).unwrap();
    assert_eq!(decoded.len(), text::MAX_TEXT);
    assert!(decoded.iter().all(|&code| code == font::LOWER_U_UMLAUT));
}
