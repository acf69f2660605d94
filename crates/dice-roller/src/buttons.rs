use embassy_rp::{Peripheral, gpio};

use dice_display::Die;

/// One pull-up button per die, pressed pulls the line low.
pub struct Buttons<'d> {
    // same order as `Die::ALL`
    inputs: [gpio::Input<'d>; 7],
}

impl<'d> Buttons<'d> {
    pub fn new(
        d4: impl Peripheral<P = impl gpio::Pin> + 'd,
        d6: impl Peripheral<P = impl gpio::Pin> + 'd,
        d8: impl Peripheral<P = impl gpio::Pin> + 'd,
        d10: impl Peripheral<P = impl gpio::Pin> + 'd,
        d12: impl Peripheral<P = impl gpio::Pin> + 'd,
        d20: impl Peripheral<P = impl gpio::Pin> + 'd,
        d100: impl Peripheral<P = impl gpio::Pin> + 'd,
    ) -> Self {
        Self {
            inputs: [
                gpio::Input::new(d4, gpio::Pull::Up),
                gpio::Input::new(d6, gpio::Pull::Up),
                gpio::Input::new(d8, gpio::Pull::Up),
                gpio::Input::new(d10, gpio::Pull::Up),
                gpio::Input::new(d12, gpio::Pull::Up),
                gpio::Input::new(d20, gpio::Pull::Up),
                gpio::Input::new(d100, gpio::Pull::Up),
            ],
        }
    }

    pub fn pressed(&self) -> Option<Die> {
        Die::first_held(|die| self.inputs[die as usize].is_low())
    }
}
