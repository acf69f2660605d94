//
//     +- A -+
//     F     B
//     +- G -+
//     E     C
//     +- D -+
//

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Lit segments of one digit, bit 0 is segment A and bit 6 is segment G.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Segments(pub u8);

//   -GFEDCBA
const TABLE: [u8; 10] = [
    0b00111111_u8, // '0'
    0b00000110_u8, // '1'
    0b01011011_u8, // '2'
    0b01001111_u8, // '3'
    0b01100110_u8, // '4'
    0b01101101_u8, // '5'
    0b01111101_u8, // '6'
    0b00000111_u8, // '7'
    0b01111111_u8, // '8'
    0b01101111_u8, // '9'
];

impl Segments {
    pub const BLANK: Segments = Segments(0);

    /// Pattern for a decimal digit. Anything above 9 is shown as 9.
    pub const fn digit(d: u8) -> Segments {
        let i = if d > 9 { 9 } else { d };
        Segments(TABLE[i as usize])
    }

    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.mask() != 0
    }
}
