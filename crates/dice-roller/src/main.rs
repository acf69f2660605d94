#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_time::Timer;

use dice_display::{DisplayConfig, DisplayDriver};
use dice_roller::{
    board::{Board, SystemClock},
    buttons::Buttons,
};

use {defmt_rtt as _, panic_probe as _};

// Each call to `update` lights one digit, so this is half the refresh period.
const REFRESH_INTERVAL_MS: u64 = 2;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    defmt::info!("Hello World!");

    let board = Board::new(
        p.PIN_8, p.PIN_9, p.PIN_10, p.PIN_11, p.PIN_12, p.PIN_13, p.PIN_14, p.PIN_15, p.PIN_16,
    );
    let config = DisplayConfig::default();
    defmt::info!("{}", config);
    let mut display = DisplayDriver::new(board, SystemClock, Board::pin_map(), config);
    display.setup();

    let buttons = Buttons::new(p.PIN_0, p.PIN_1, p.PIN_2, p.PIN_3, p.PIN_4, p.PIN_5, p.PIN_6);
    // ring oscillator jitter, nothing to seed
    let mut rng = RoscRng;
    let mut held = None;

    loop {
        let pressed = buttons.pressed();
        match (held, pressed) {
            (_, Some(die)) => {
                if held != pressed {
                    defmt::debug!("{} pressed", die);
                }
                // keeps re-rolling while the button is down
                display.set_value(Some(die.roll(&mut rng)));
            }
            (Some(die), None) => {
                if let Some(v) = display.value() {
                    defmt::info!("{} rolled {}", die, v);
                }
            }
            (None, None) => (),
        }
        held = pressed;

        display.update();
        Timer::after_millis(REFRESH_INTERVAL_MS).await;
    }
}
