use core::ops::RangeInclusive;

use rand_core::RngCore;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl Die {
    /// Button priority order: when several are held the first one wins.
    pub const ALL: [Die; 7] = [
        Die::D4,
        Die::D6,
        Die::D8,
        Die::D10,
        Die::D12,
        Die::D20,
        Die::D100,
    ];

    /// First die whose button reads as held, in [`Die::ALL`] order.
    pub fn first_held(mut held: impl FnMut(Die) -> bool) -> Option<Die> {
        Die::ALL.into_iter().find(|die| held(*die))
    }

    pub const fn faces(self) -> u8 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
            Die::D100 => 100,
        }
    }

    /// Possible results. A d100 rolls 0..=99 since two digits show "00" for 100.
    pub const fn range(self) -> RangeInclusive<u8> {
        match self {
            Die::D100 => 0..=99,
            _ => 1..=self.faces(),
        }
    }

    pub fn roll<R: RngCore + ?Sized>(self, rng: &mut R) -> u8 {
        let range = self.range();
        let (lo, hi) = (*range.start(), *range.end());
        let span = u32::from(hi - lo) + 1;
        lo + (rng.next_u32() % span) as u8
    }
}
