//! Multiplexed driver for a dual seven-segment display.
//!
//! Both digits share the seven segment lines, so only one of them is lit at
//! a time. [`DisplayDriver::update`] has to be called from a tight loop; each
//! call either shows the next digit or advances the idle spinner by one frame.

use crate::config::DisplayConfig;
use crate::line::{Clock, Digit, Level, LinePort, PinMap};
use crate::segments::{Segment, Segments};

const SPINNER_FRAMES: [(Digit, Segment); 8] = [
    (Digit::One, Segment::A),
    (Digit::One, Segment::B),
    (Digit::One, Segment::C),
    (Digit::One, Segment::D),
    (Digit::Two, Segment::D),
    (Digit::Two, Segment::E),
    (Digit::Two, Segment::F),
    // back to A to close the loop
    (Digit::Two, Segment::A),
];

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Digits { phase: Digit },
    Spinner { frame: u8, last_frame_ms: Option<u64> },
}

impl Mode {
    const fn digits() -> Self {
        Mode::Digits { phase: Digit::One }
    }

    const fn spinner() -> Self {
        Mode::Spinner {
            frame: 0,
            last_frame_ms: None,
        }
    }
}

pub struct DisplayDriver<P, C>
where
    P: LinePort,
    C: Clock,
{
    port: P,
    clock: C,
    pins: PinMap<P::Line>,
    config: DisplayConfig,
    value: Option<u8>,
    mode: Mode,
}

impl<P, C> DisplayDriver<P, C>
where
    P: LinePort,
    C: Clock,
{
    /// Starts out idle, showing the spinner.
    pub fn new(port: P, clock: C, pins: PinMap<P::Line>, config: DisplayConfig) -> Self {
        Self {
            port,
            clock,
            pins,
            config,
            value: None,
            mode: Mode::spinner(),
        }
    }

    pub fn setup(&mut self) {
        for line in self.pins.all() {
            self.port.configure_output(line);
        }
    }

    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// `None` switches to the idle spinner.
    pub fn set_value(&mut self, value: Option<u8>) {
        if value.is_some() != self.value.is_some() {
            self.mode = if value.is_some() {
                Mode::digits()
            } else {
                Mode::spinner()
            };
            #[cfg(feature = "defmt")]
            defmt::debug!("display mode: {}", self.mode);
        }
        self.value = value;
    }

    pub fn update(&mut self) {
        match (self.value, self.mode) {
            (Some(value), Mode::Digits { phase }) => {
                self.show_digit(value, phase);
                self.mode = Mode::Digits {
                    phase: phase.other(),
                };
            }
            (None, Mode::Spinner { frame, last_frame_ms }) => {
                let now = self.clock.now_ms();
                let interval = self.config.frame_interval_ms;
                if last_frame_ms.is_some_and(|last| now.wrapping_sub(last) < interval) {
                    return;
                }

                let frame = if usize::from(frame) < SPINNER_FRAMES.len() {
                    frame
                } else {
                    0
                };
                self.show_spinner_frame(frame);
                self.mode = Mode::Spinner {
                    frame: frame + 1,
                    last_frame_ms: Some(now),
                };
            }
            // value and mode only disagree if they were changed behind set_value
            (value, _) => {
                self.mode = match value {
                    Some(_) => Mode::digits(),
                    None => Mode::spinner(),
                };
                self.update();
            }
        }
    }

    fn show_digit(&mut self, value: u8, digit: Digit) {
        let n = match digit {
            Digit::One => value % 10,
            Digit::Two => value / 10 % 10,
        };
        self.select(digit.other(), false);
        self.write_segments(Segments::digit(n));
        self.select(digit, true);
    }

    fn show_spinner_frame(&mut self, frame: u8) {
        let (digit, segment) = SPINNER_FRAMES[usize::from(frame) % SPINNER_FRAMES.len()];
        self.select(Digit::One, false);
        self.select(Digit::Two, false);
        self.write_segments(Segments::BLANK);
        self.select(digit, true);
        let line = self.pins.segment(segment);
        self.port.write_line(line, self.config.segment_active);
    }

    fn select(&mut self, digit: Digit, on: bool) {
        let level = self.level(self.config.digit_active, on);
        self.port.write_line(self.pins.digit(digit), level);
    }

    fn write_segments(&mut self, segments: Segments) {
        for segment in Segment::ALL {
            let level = self.level(self.config.segment_active, segments.is_lit(segment));
            self.port.write_line(self.pins.segment(segment), level);
        }
    }

    fn level(&self, active: Level, on: bool) -> Level {
        if on { active } else { !active }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use core::cell::Cell;
    use std::vec::Vec;

    use crate::driver::*;

    // Lines 0 and 1 select digits, 2..=8 are segments A..G.
    #[derive(Default)]
    struct RecordingPort {
        outputs: Vec<u8>,
        levels: [Option<Level>; 9],
        writes: Vec<(u8, Level)>,
    }

    impl LinePort for RecordingPort {
        type Line = u8;

        fn configure_output(&mut self, line: u8) {
            self.outputs.push(line);
        }

        fn write_line(&mut self, line: u8, level: Level) {
            self.levels[line as usize] = Some(level);
            self.writes.push((line, level));
        }
    }

    impl RecordingPort {
        fn high(&self, line: u8) -> bool {
            self.levels[line as usize] == Some(Level::High)
        }

        fn lit_digit(&self) -> Option<Digit> {
            match (self.high(0), self.high(1)) {
                (true, false) => Some(Digit::One),
                (false, true) => Some(Digit::Two),
                _ => None,
            }
        }

        fn lit_segments(&self) -> [bool; 7] {
            core::array::from_fn(|i| self.high(i as u8 + 2))
        }
    }

    #[derive(Default)]
    struct ManualClock(Cell<u64>);

    impl Clock for &ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    fn driver(clock: &ManualClock) -> DisplayDriver<RecordingPort, &ManualClock> {
        let pins = PinMap::new(0, 1, [2, 3, 4, 5, 6, 7, 8]);
        DisplayDriver::new(RecordingPort::default(), clock, pins, DisplayConfig::default())
    }

    fn lit(segments: Segments) -> [bool; 7] {
        Segment::ALL.map(|s| segments.is_lit(s))
    }

    #[test]
    fn setup_configures_all_lines() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.setup();
        assert_eq!(d.port.outputs, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(d.port.writes.is_empty());
    }

    #[test]
    fn seven_alternates_ones_and_tens() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.set_value(Some(7));

        for _ in 0..3 {
            d.update();
            assert_eq!(d.port.lit_digit(), Some(Digit::One));
            assert_eq!(
                d.port.lit_segments(),
                [true, true, true, false, false, false, false]
            );

            d.update();
            assert_eq!(d.port.lit_digit(), Some(Digit::Two));
            assert_eq!(
                d.port.lit_segments(),
                [true, true, true, true, true, true, false]
            );
        }
    }

    #[test]
    fn other_digit_is_released_before_segments_change() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.set_value(Some(42));

        d.update();
        assert_eq!(d.port.writes.first(), Some(&(1, Level::Low)));
        assert_eq!(d.port.writes.last(), Some(&(0, Level::High)));

        d.port.writes.clear();
        d.update();
        assert_eq!(d.port.writes.first(), Some(&(0, Level::Low)));
        assert_eq!(d.port.writes.last(), Some(&(1, Level::High)));
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(4)));
    }

    #[test]
    fn every_two_digit_value() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        for v in 0..100 {
            d.set_value(Some(v));
            // re-align on the ones digit whatever phase the previous value left
            d.update();
            if d.port.lit_digit() != Some(Digit::One) {
                d.update();
            }
            assert_eq!(d.port.lit_digit(), Some(Digit::One));
            assert_eq!(d.port.lit_segments(), lit(Segments::digit(v % 10)), "{v}");
            d.update();
            assert_eq!(d.port.lit_digit(), Some(Digit::Two));
            assert_eq!(d.port.lit_segments(), lit(Segments::digit(v / 10)), "{v}");
        }
    }

    #[test]
    fn hundred_and_up_wraps() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.set_value(Some(100));
        d.update();
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(0)));
        d.update();
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(0)));

        d.set_value(Some(u8::MAX));
        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::One));
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(5)));
        d.update();
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(5)));
    }

    #[test]
    fn spinner_first_two_frames() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        assert_eq!(d.value(), None);

        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::One));
        assert_eq!(
            d.port.lit_segments(),
            [true, false, false, false, false, false, false]
        );

        clock.0.set(600);
        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::One));
        assert_eq!(
            d.port.lit_segments(),
            [false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn spinner_waits_for_frame_interval() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        clock.0.set(1_000);
        d.update();
        let n = d.port.writes.len();

        for t in [1_000, 1_001, 1_250, 1_499] {
            clock.0.set(t);
            d.update();
            assert_eq!(d.port.writes.len(), n, "t = {t}");
        }

        clock.0.set(1_500);
        d.update();
        assert!(d.port.writes.len() > n);
    }

    #[test]
    fn spinner_has_period_eight() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        let mut frames = Vec::new();
        for i in 0..24 {
            clock.0.set(i * 500);
            d.update();
            let segments = d.port.lit_segments();
            assert_eq!(segments.iter().filter(|s| **s).count(), 1);
            let segment = segments.iter().position(|s| *s).unwrap();
            frames.push((d.port.lit_digit().unwrap(), segment));
        }

        let expected = SPINNER_FRAMES.map(|(digit, segment)| (digit, segment.index()));
        assert_eq!(frames[..8], expected);
        assert_eq!(frames[..8], frames[8..16]);
        assert_eq!(frames[..8], frames[16..]);

        let mut distinct = frames[..8].to_vec();
        distinct.sort_by_key(|(digit, segment)| (*digit as u8, *segment));
        distinct.dedup();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn spinner_clears_leftover_digit() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.set_value(Some(88));
        d.update();
        d.set_value(None);
        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::One));
        assert_eq!(d.port.lit_segments().iter().filter(|s| **s).count(), 1);
    }

    #[test]
    fn switch_to_value_on_any_frame() {
        for frames in 0..8 {
            let clock = ManualClock::default();
            let mut d = driver(&clock);
            for i in 0..frames {
                clock.0.set(i * 500);
                d.update();
            }

            d.set_value(Some(19));
            d.update();
            assert_eq!(d.port.lit_digit(), Some(Digit::One));
            assert_eq!(d.port.lit_segments(), lit(Segments::digit(9)));
            d.update();
            assert_eq!(d.port.lit_digit(), Some(Digit::Two));
            assert_eq!(d.port.lit_segments(), lit(Segments::digit(1)));
        }
    }

    #[test]
    fn new_value_keeps_phase() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.set_value(Some(12));
        d.update();
        d.set_value(Some(34));
        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::Two));
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(3)));
    }

    #[test]
    fn out_of_range_frame_restarts() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.mode = Mode::Spinner {
            frame: 200,
            last_frame_ms: None,
        };
        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::One));
        assert!(d.port.lit_segments()[Segment::A.index()]);
    }

    #[test]
    fn stale_mode_is_resynced() {
        let clock = ManualClock::default();
        let mut d = driver(&clock);
        d.value = Some(5);
        d.update();
        assert_eq!(d.port.lit_digit(), Some(Digit::One));
        assert_eq!(d.port.lit_segments(), lit(Segments::digit(5)));
    }

    #[test]
    fn active_low_wiring() {
        let clock = ManualClock::default();
        let pins = PinMap::new(0, 1, [2, 3, 4, 5, 6, 7, 8]);
        let config = DisplayConfig {
            digit_active: Level::Low,
            segment_active: Level::Low,
            ..DisplayConfig::default()
        };
        let mut d = DisplayDriver::new(RecordingPort::default(), &clock, pins, config);
        d.set_value(Some(1));
        d.update();
        assert_eq!(d.port.levels[0], Some(Level::Low));
        assert_eq!(d.port.levels[1], Some(Level::High));
        // '1' lights B and C only
        assert_eq!(d.port.levels[2], Some(Level::High));
        assert_eq!(d.port.levels[3], Some(Level::Low));
        assert_eq!(d.port.levels[4], Some(Level::Low));
        assert_eq!(d.port.levels[8], Some(Level::High));
    }
}
