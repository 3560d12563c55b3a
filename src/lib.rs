//! Scrolling-text marquee for NeoPixel-style (WS2812) LED matrix panels on Pico 1 and 2.
//!
//! # Glossary
//!
//! - **Strip order:** a WS2812 panel is one LED strip folded into rows and
//!   columns. Frames go out over PIO ([Programmable
//!   I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25))
//!   + DMA ([Direct Memory
//!   Access](https://en.wikipedia.org/wiki/Direct_memory_access)) in strip
//!   order; a [layout](crate::matrix::layout::LedLayout) says which strip
//!   LED lights which panel cell.
//! - **Staged frame:** drawing lands in an in-memory
//!   [frame](crate::matrix::Frame1d); nothing reaches the LEDs until
//!   [`refresh`](crate::matrix::LedMatrix::refresh) pushes it.
//! - **Marquee pass:** one full right-to-left scroll of a text banner, from
//!   entering at the right edge to fully leaving at the left.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

mod error;
pub mod font;
pub mod matrix;
pub mod text;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
