//! A text marquee on a NeoPixel-style (WS2812) LED matrix wired as one strip.
//!
//! The panel is a single LED strip folded into rows and columns, so every 2D
//! operation ultimately resolves a `(col, row)` cell to a strip position. A
//! [`LedLayout`] describes that wiring once; [`LedMatrix`] precomputes the
//! lookup and exposes a small marquee surface on top: stage pixels with
//! [`set_pixel`](LedMatrix::set_pixel) or [`draw_text`](LedMatrix::draw_text),
//! push the staged [`Frame1d`] with [`refresh`](LedMatrix::refresh), or let
//! [`scroll_text`](LedMatrix::scroll_text) run a whole banner pass.
//!
//! The marquee core never touches hardware directly. Frames leave through a
//! [`StripTransport`] (on the Pico, the PIO WS2812 driver) and scroll pacing
//! goes through an injected `DelayNs`, so the same code runs against
//! recording fakes in host tests.
//!
//! # Example
//!
//! ```rust,no_run
//! # #![no_std]
//! # #![no_main]
//! # #[panic_handler]
//! # fn panic(_: &core::panic::PanicInfo) -> ! { loop {} }
//! use embassy_executor::Spawner;
//! use embassy_rp::bind_interrupts;
//! use embassy_rp::peripherals::PIO0;
//! use embassy_rp::pio::{InterruptHandler, Pio};
//! use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
//! use embassy_time::Delay;
//! use led_marquee::matrix::{DEFAULT_FRAME_DELAY, LedMatrix, MARQUEE_64X8, Rgb, STRIP_LEN};
//!
//! bind_interrupts!(struct Irqs {
//!     PIO0_IRQ_0 => InterruptHandler<PIO0>;
//! });
//!
//! #[embassy_executor::main]
//! async fn main(_spawner: Spawner) {
//!     let hardware = embassy_rp::init(Default::default());
//!     let Pio {
//!         mut common, sm0, ..
//!     } = Pio::new(hardware.PIO0, Irqs);
//!     let program = PioWs2812Program::new(&mut common);
//!     let driver = PioWs2812::<PIO0, 0, STRIP_LEN, _>::new(
//!         &mut common,
//!         sm0,
//!         hardware.DMA_CH0,
//!         hardware.PIN_16,
//!         &program,
//!     );
//!
//!     let mut marquee = LedMatrix::new(driver, Delay, &MARQUEE_64X8)
//!         .await
//!         .expect("blank frame cannot be rejected by the PIO driver");
//!     marquee
//!         .scroll_text("Grüße!", Rgb::new(0, 32, 0), DEFAULT_FRAME_DELAY)
//!         .await
//!         .expect("banner text fits the decode buffer");
//! }
//! ```

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut},
};

#[cfg(not(feature = "host"))]
use embassy_rp::pio::Instance;
#[cfg(not(feature = "host"))]
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::Duration;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use embedded_hal_async::delay::DelayNs;
use smart_leds::RGB8;

use crate::Result;
use crate::font;
use crate::matrix::layout::LedLayout;
use crate::text;

pub mod layout;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Columns on the stock marquee panel.
pub const MATRIX_WIDTH: usize = 64;

/// Rows on the stock marquee panel.
pub const MATRIX_HEIGHT: usize = 8;

/// LEDs on the stock marquee strip, one per panel cell.
pub const STRIP_LEN: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Frame delay that scrolls text at a comfortable reading speed.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(50);

/// Wiring of the stock 64×8 marquee panel.
///
/// The strip snakes through the columns (column-major serpentine) and the
/// whole panel is mounted upside down, so data enters at what the viewer
/// sees as the bottom-right corner: strip LED 0 lights cell `(63, 7)` and
/// cell `(0, 0)` is lit by strip LED 504.
pub const MARQUEE_64X8: LedLayout<STRIP_LEN, MATRIX_WIDTH, MATRIX_HEIGHT> =
    LedLayout::serpentine_column_major().rotate_180();

// ============================================================================
// Frames
// ============================================================================

/// [`Rgb`] pixel data for an LED strip, in strip order.
///
/// Frames deref to `[Rgb; N]`, so you can inspect or mutate raw strip pixels
/// directly. [`LedMatrix`] stages one frame and maps panel coordinates onto
/// it for you.
#[derive(Clone, Copy, Debug)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Sink for finished frames, usually a PIO WS2812 driver.
///
/// The marquee core is written against this trait so host tests can record
/// frames instead of driving hardware.
pub trait StripTransport<const N: usize> {
    /// Send one complete frame to the strip.
    async fn push(&mut self, frame: &Frame1d<N>) -> Result<()>;
}

#[cfg(not(feature = "host"))]
impl<PIO, const SM: usize, const N: usize, ORDER> StripTransport<N>
    for PioWs2812<'static, PIO, SM, N, ORDER>
where
    PIO: Instance,
    ORDER: embassy_rp::pio_programs::ws2812::RgbColorOrder,
{
    async fn push(&mut self, frame: &Frame1d<N>) -> Result<()> {
        self.write(frame).await;
        Ok(())
    }
}

// ============================================================================
// LedMatrix
// ============================================================================

/// A text marquee over one WS2812 strip folded into a `W`×`H` panel.
///
/// All drawing goes into a staged [`Frame1d`]; nothing reaches the LEDs
/// until [`refresh`](Self::refresh) pushes it through the transport. See the
/// [module documentation](mod@crate::matrix) for a complete example.
pub struct LedMatrix<T, D, const N: usize, const W: usize, const H: usize> {
    transport: T,
    delay: D,
    frame: Frame1d<N>,
    index_map: [u16; N],
}

impl<T, D, const N: usize, const W: usize, const H: usize> LedMatrix<T, D, N, W, H> {
    /// Strip position of panel cell `(x, y)`.
    ///
    /// `x` counts columns from the left edge, `y` rows from the top. Any
    /// coordinate off the panel returns `N`, one past the last LED, which
    /// every pixel write treats as a no-op. Callers can therefore draw
    /// partially off-panel content without clamping first.
    #[must_use]
    pub fn strip_index(&self, x: i32, y: i32) -> usize {
        if x < 0 || x >= W as i32 || y < 0 || y >= H as i32 {
            return N;
        }
        usize::from(self.index_map[y as usize * W + x as usize])
    }

    /// Set panel cell `(x, y)` in the staged frame.
    ///
    /// Off-panel coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let index = self.strip_index(x, y);
        if let Some(led) = self.frame.get_mut(index) {
            *led = color;
        }
    }

    /// Blank the staged frame. Does not touch the LEDs.
    pub fn clear(&mut self) {
        self.frame = Frame1d::new();
    }

    /// The staged frame, in strip order.
    #[must_use]
    pub fn frame(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// Mutable access to the staged frame, in strip order.
    pub fn frame_mut(&mut self) -> &mut Frame1d<N> {
        &mut self.frame
    }

    /// Rasterize `text` into the staged frame without clearing it first.
    ///
    /// Panel column `x` shows text column `x + x_offset`, so a positive
    /// offset shifts the text left and a negative one shifts it right.
    /// Pixels are only ever set, never cleared, letting callers layer text
    /// over an existing frame. Call [`refresh`](Self::refresh) to put the
    /// result on the LEDs.
    ///
    /// Text is decoded with [`text::decode`], so the German umlauts render
    /// and other non-ASCII input degrades to `?`.
    pub fn draw_text(&mut self, text: &str, x_offset: i32, color: Rgb) -> Result<()> {
        let decoded = text::decode(text.as_bytes())?;
        self.render_columns(&decoded, x_offset, color);
        Ok(())
    }

    fn render_columns(&mut self, decoded: &[u8], x_offset: i32, color: Rgb) {
        for x in 0..W as i32 {
            let text_col = x + x_offset;
            if text_col < 0 {
                continue;
            }
            let slot = text_col as usize / font::GLYPH_WIDTH;
            let col_in_glyph = text_col as usize % font::GLYPH_WIDTH;
            let code = match decoded.get(slot) {
                Some(&code) => code,
                // Past the last glyph: leave the column blank.
                None => continue,
            };
            if let Some(glyph) = font::glyph(code) {
                for (y, &row) in glyph.iter().enumerate() {
                    if row & (0x80u8 >> col_in_glyph) != 0 {
                        self.set_pixel(x, y as i32, color);
                    }
                }
            }
        }
    }
}

impl<T, D, const N: usize, const W: usize, const H: usize> LedMatrix<T, D, N, W, H>
where
    T: StripTransport<N>,
    D: DelayNs,
{
    /// Create a marquee over `transport` and clear the display.
    ///
    /// `layout` says which strip LED lights each panel cell; pass
    /// [`MARQUEE_64X8`] for the stock panel. Construction pushes one blank
    /// frame so pixels left over from a previous run never linger.
    pub async fn new(transport: T, delay: D, layout: &LedLayout<N, W, H>) -> Result<Self> {
        let mut matrix = Self {
            transport,
            delay,
            frame: Frame1d::new(),
            index_map: layout.xy_to_index(),
        };
        matrix.refresh().await?;
        #[cfg(not(feature = "host"))]
        defmt::info!(
            "LedMatrix::new: {}x{} panel on {} LEDs, display cleared",
            W,
            H,
            N
        );
        Ok(matrix)
    }

    /// Push the staged frame to the strip.
    pub async fn refresh(&mut self) -> Result<()> {
        self.transport.push(&self.frame).await
    }

    /// Scroll `text` across the panel once, right to left.
    ///
    /// The text enters from the right edge and runs until it has fully left
    /// through the left edge; both the first and the last pushed frame are
    /// blank. Each frame is cleared, rasterized, pushed, and then held for
    /// `frame_delay` ([`DEFAULT_FRAME_DELAY`] reads comfortably). The future
    /// completes after the final blank frame; dropping it stops the scroll
    /// with whatever frame was pushed last still showing.
    pub async fn scroll_text(
        &mut self,
        text: &str,
        color: Rgb,
        frame_delay: Duration,
    ) -> Result<()> {
        let decoded = text::decode(text.as_bytes())?;
        let text_width = (decoded.len() * font::GLYPH_WIDTH) as i32;
        #[cfg(not(feature = "host"))]
        defmt::debug!(
            "LedMatrix::scroll_text: scrolling {} text columns",
            text_width
        );
        let delay_ms = frame_delay.as_millis() as u32;
        for offset in -(W as i32)..=text_width {
            self.clear();
            self.render_columns(&decoded, offset, color);
            self.refresh().await?;
            self.delay.delay_ms(delay_ms).await;
        }
        Ok(())
    }
}

impl<T, D, const N: usize, const W: usize, const H: usize> OriginDimensions
    for LedMatrix<T, D, N, W, H>
{
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<T, D, const N: usize, const W: usize, const H: usize> DrawTarget for LedMatrix<T, D, N, W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, rgb888_to_rgb8(color));
        }
        Ok(())
    }
}

/// Convert an [`Rgb`] color to an embedded-graphics [`Rgb888`] color.
#[must_use]
pub fn rgb8_to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert an embedded-graphics [`Rgb888`] color to an [`Rgb`] color.
#[must_use]
pub fn rgb888_to_rgb8(color: Rgb888) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}
