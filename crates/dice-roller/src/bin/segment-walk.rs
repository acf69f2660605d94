#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};

use dice_display::{DisplayConfig, DisplayDriver};
use dice_roller::board::{Board, SystemClock};

use {defmt_rtt as _, panic_probe as _};

// Shows the spinner for a few seconds, then counts 00..99 forever.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let board = Board::new(
        p.PIN_8, p.PIN_9, p.PIN_10, p.PIN_11, p.PIN_12, p.PIN_13, p.PIN_14, p.PIN_15, p.PIN_16,
    );
    let mut display = DisplayDriver::new(board, SystemClock, Board::pin_map(), DisplayConfig::default());
    display.setup();

    let mut next = Instant::now() + Duration::from_secs(4);
    let mut count = 0_u8;

    loop {
        if Instant::now() >= next {
            defmt::debug!("showing {}", count);
            display.set_value(Some(count));
            count = (count + 1) % 100;
            next += Duration::from_millis(500);
        }
        display.update();
        Timer::after_millis(2).await;
    }
}
