//! Looping right-to-left banner with umlauts on the 64×8 marquee.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::Delay;
use led_marquee::{
    Result,
    matrix::{DEFAULT_FRAME_DELAY, LedMatrix, MARQUEE_64X8, STRIP_LEN},
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

    // Each pass enters from the right edge and runs until the text has
    // fully left the panel, so back-to-back passes read as one banner.
    // The umlauts come straight from the panel font.
    loop {
        marquee
            .scroll_text("Grüße vom Marquee! ÄÖÜ äöü", colors::GREEN, DEFAULT_FRAME_DELAY)
            .await?;
    }
}
