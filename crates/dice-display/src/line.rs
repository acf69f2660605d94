use core::ops::Not;

use crate::segments::Segment;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Output lines the display is wired to.
pub trait LinePort {
    type Line: Copy;

    fn configure_output(&mut self, line: Self::Line);
    fn write_line(&mut self, line: Self::Line, level: Level);
}

/// Monotonic millisecond counter.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Digit-select position. `One` shows the ones, `Two` the tens.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Digit {
    One,
    Two,
}

impl Digit {
    pub fn other(self) -> Digit {
        match self {
            Digit::One => Digit::Two,
            Digit::Two => Digit::One,
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinMap<L> {
    digits: [L; 2],
    segments: [L; 7],
}

impl<L: Copy> PinMap<L> {
    /// `segments` are given in A..G order.
    pub fn new(dig_1: L, dig_2: L, segments: [L; 7]) -> Self {
        Self {
            digits: [dig_1, dig_2],
            segments,
        }
    }

    pub fn digit(&self, digit: Digit) -> L {
        match digit {
            Digit::One => self.digits[0],
            Digit::Two => self.digits[1],
        }
    }

    pub fn segment(&self, segment: Segment) -> L {
        self.segments[segment.index()]
    }

    /// Digit lines first, then segments A..G.
    pub fn all(&self) -> [L; 9] {
        let [d1, d2] = self.digits;
        let [a, b, c, d, e, f, g] = self.segments;
        [d1, d2, a, b, c, d, e, f, g]
    }
}
