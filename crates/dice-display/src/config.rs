use crate::line::Level;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Minimum time between two idle animation frames.
    pub frame_interval_ms: u64,
    /// Level that selects a digit.
    pub digit_active: Level,
    /// Level that lights a segment.
    pub segment_active: Level,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 500,
            digit_active: Level::High,
            segment_active: Level::High,
        }
    }
}
