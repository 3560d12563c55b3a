#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the PNG preview renderers.

use led_marquee::matrix::{Frame1d, MARQUEE_64X8, STRIP_LEN};
use led_marquee::to_png::{write_frame_png, write_frames_apng};
use smart_leds::colors;
use std::error::Error;
use std::fs::File;
use std::path::Path;

fn read_png(path: &Path) -> Result<(png::OutputInfo, Vec<u8>), Box<dyn Error>> {
    let decoder = png::Decoder::new(File::open(path)?);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());
    Ok((info, buf))
}

/// Decoded 16-bit RGB channels of the pixel at `(x, y)`.
fn channels_at(buf: &[u8], width: u32, x: u32, y: u32) -> (u16, u16, u16) {
    let idx = ((y * width + x) * 6) as usize;
    let red = u16::from_be_bytes([buf[idx], buf[idx + 1]]);
    let green = u16::from_be_bytes([buf[idx + 2], buf[idx + 3]]);
    let blue = u16::from_be_bytes([buf[idx + 4], buf[idx + 5]]);
    (red, green, blue)
}

#[test]
fn one_lit_led_renders_a_red_dot_in_its_cell() -> Result<(), Box<dyn Error>> {
    let mut frame = Frame1d::<STRIP_LEN>::new();
    // Strip LED 504 lights panel cell (0, 0).
    frame[504] = colors::RED;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("marquee.png");
    write_frame_png(&frame, &MARQUEE_64X8, &path, 720)?;

    let (info, buf) = read_png(&path)?;
    // At 720 the renderer settles on 11-pixel cells with a 4-pixel border:
    // 64 * 11 + 8 wide, 8 * 11 + 8 tall.
    assert_eq!(info.width, 712);
    assert_eq!(info.height, 96);
    assert_eq!(info.bit_depth, png::BitDepth::Sixteen);
    assert_eq!(info.color_type, png::ColorType::Rgb);

    // Center of cell (0, 0): full-intensity red.
    assert_eq!(channels_at(&buf, info.width, 9, 9), (65535, 0, 0));
    // Center of the neighboring cell (1, 0): dark.
    assert_eq!(channels_at(&buf, info.width, 20, 9), (0, 0, 0));
    // The image corner sits outside every LED circle.
    assert_eq!(channels_at(&buf, info.width, 0, 0), (0, 0, 0));
    Ok(())
}

#[test]
fn blank_frame_renders_all_black() -> Result<(), Box<dyn Error>> {
    let frame = Frame1d::<STRIP_LEN>::new();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blank.png");
    write_frame_png(&frame, &MARQUEE_64X8, &path, 720)?;

    let (_info, buf) = read_png(&path)?;
    assert!(buf.iter().all(|&byte| byte == 0));
    Ok(())
}

#[test]
fn apng_preview_carries_one_png_frame_per_step() -> Result<(), Box<dyn Error>> {
    let frames = [
        Frame1d::<STRIP_LEN>::new(),
        Frame1d::filled(colors::GREEN),
        Frame1d::new(),
    ];
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("marquee-pass.png");
    write_frames_apng(&frames, &MARQUEE_64X8, &path, 520, 50)?;

    let decoder = png::Decoder::new(File::open(&path)?);
    let reader = decoder.read_info()?;
    let animation = reader
        .info()
        .animation_control
        .expect("preview must be animated");
    assert_eq!(animation.num_frames, 3);
    Ok(())
}
