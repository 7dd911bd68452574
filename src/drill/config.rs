//! Drill tuning values.

use crate::time::ms_to_ticks;

/// Compiled-in tuning for a drill session.
#[derive(Clone, Debug, PartialEq)]
pub struct DrillConfig {
    /// Game ticks per real-time second.
    pub ticks_per_sec: u32,
    /// How long the "correct" feedback stays up before auto-advancing.
    pub correct_delay_ms: u32,
    /// Points for every correct answer.
    pub base_points: u64,
    /// Extra points per streak step held before the answer.
    pub streak_bonus: u64,
    /// Longest answer the input field accepts (all answers fit in 3 digits).
    pub max_input_len: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            ticks_per_sec: 10,
            correct_delay_ms: 1000,
            base_points: 10,
            streak_bonus: 2,
            max_input_len: 4,
        }
    }
}

impl DrillConfig {
    /// The auto-advance delay expressed in ticks.
    pub fn correct_delay_ticks(&self) -> u32 {
        ms_to_ticks(self.correct_delay_ms, self.ticks_per_sec)
    }

    /// Points awarded for a correct answer given the streak held before it.
    pub fn award_for(&self, streak: u32) -> u64 {
        self.base_points + self.streak_bonus * streak as u64
    }
}
