//! embedded-graphics border plus umlaut glyphs on the 64×8 marquee.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future, panic};

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::{Delay, Duration, Timer};
use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use led_marquee::{
    Result,
    matrix::{
        DEFAULT_FRAME_DELAY, LedMatrix, MARQUEE_64X8, MATRIX_HEIGHT, MATRIX_WIDTH, STRIP_LEN,
        rgb8_to_rgb888,
    },
};
use smart_leds::colors;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let driver =
        PioWs2812::<PIO0, 0, STRIP_LEN, _>::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);

    let mut marquee = LedMatrix::new(driver, Delay, &MARQUEE_64X8).await?;

    // A scroll pass is just a future. Racing it against a timer abandons
    // the pass at whatever frame is showing when the deadline hits.
    let pass = marquee.scroll_text("Grüße aus Berlin", colors::GREEN, DEFAULT_FRAME_DELAY);
    match select(pass, Timer::after(Duration::from_secs(5))).await {
        Either::First(finished) => finished?,
        Either::Second(()) => {}
    }

    // Compose a static card: an embedded-graphics border with the three
    // capital umlauts centered inside it.
    //
    // - We use smart-leds' `RGB8` color type throughout led-marquee.
    //   embedded-graphics uses its own `Rgb888`, so we convert.
    marquee.clear();
    let border_style = PrimitiveStyle::with_stroke(rgb8_to_rgb888(colors::INDIGO), 1);
    Rectangle::new(
        Point::zero(),
        Size::new(MATRIX_WIDTH as u32, MATRIX_HEIGHT as u32),
    )
    .into_styled(border_style)
    .draw(&mut marquee)?;

    // Text never clears pixels, so it layers over the border.
    // "ÄÖÜ" is 3 glyphs of 8 columns; a negative offset shifts it right.
    marquee.draw_text("ÄÖÜ", -20, colors::DARK_ORANGE)?;

    // Individual pixels are fair game too: accent the corners.
    marquee.set_pixel(0, 0, colors::RED);
    marquee.set_pixel(MATRIX_WIDTH as i32 - 1, 0, colors::RED);
    marquee.set_pixel(0, MATRIX_HEIGHT as i32 - 1, colors::RED);
    marquee.set_pixel(MATRIX_WIDTH as i32 - 1, MATRIX_HEIGHT as i32 - 1, colors::RED);

    marquee.refresh().await?;

    future::pending().await // run forever
}
