//! Static "HELLO" on the 64×8 marquee.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future, panic};

use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::Delay;
use led_marquee::{
    Result,
    matrix::{LedMatrix, MARQUEE_64X8, STRIP_LEN},
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

    // The stock 64x8 panel is one 512-LED strip on a single data pin.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let driver =
        PioWs2812::<PIO0, 0, STRIP_LEN, _>::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);

    // Construction clears the panel, so nothing lingers from a previous run.
    let mut marquee = LedMatrix::new(driver, Delay, &MARQUEE_64X8).await?;

    // Stage the text, then push it. It stays until you replace it.
    marquee.draw_text("HELLO", 0, colors::DARK_ORANGE)?;
    marquee.refresh().await?;

    // Power note: all 512 LEDs at full white would draw about
    // 512 x 60mA = 30A. Text on a black background keeps the panel
    // comfortably within a USB supply.

    future::pending().await // run forever
}
