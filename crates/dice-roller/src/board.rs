use embassy_rp::{Peripheral, gpio};
use embassy_time::Instant;

use dice_display::{Clock, Level, LinePort, PinMap};

/// The nine display lines. Line ids are indices into `lines`.
pub struct Board<'d> {
    lines: [gpio::Flex<'d>; 9],
}

impl<'d> Board<'d> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dig_1: impl Peripheral<P = impl gpio::Pin> + 'd,
        dig_2: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_a: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_b: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_c: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_d: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_e: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_f: impl Peripheral<P = impl gpio::Pin> + 'd,
        seg_g: impl Peripheral<P = impl gpio::Pin> + 'd,
    ) -> Self {
        Self {
            lines: [
                gpio::Flex::new(dig_1),
                gpio::Flex::new(dig_2),
                gpio::Flex::new(seg_a),
                gpio::Flex::new(seg_b),
                gpio::Flex::new(seg_c),
                gpio::Flex::new(seg_d),
                gpio::Flex::new(seg_e),
                gpio::Flex::new(seg_f),
                gpio::Flex::new(seg_g),
            ],
        }
    }

    pub fn pin_map() -> PinMap<usize> {
        PinMap::new(0, 1, [2, 3, 4, 5, 6, 7, 8])
    }
}

impl LinePort for Board<'_> {
    type Line = usize;

    fn configure_output(&mut self, line: usize) {
        if let Some(pin) = self.lines.get_mut(line) {
            pin.set_as_output();
        }
    }

    fn write_line(&mut self, line: usize, level: Level) {
        if let Some(pin) = self.lines.get_mut(line) {
            pin.set_level(match level {
                Level::High => gpio::Level::High,
                Level::Low => gpio::Level::Low,
            });
        }
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
